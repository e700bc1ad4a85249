// src/layout/save_layout.rs
use super::record::{RecordLayout, MENU_DATA_LAYOUT, SAVE_FILE_LAYOUT};
use super::{COPIES_PER_RECORD, EEPROM_SIZE, NUM_SAVE_FILES};
use crate::types::RecordId;
use std::ops::Range;

/// Versioned description of the whole save image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveLayout {
    pub version: u32,
    pub num_save_files: usize,
    pub copies: usize,
    pub save_file: &'static RecordLayout,
    pub menu_data: &'static RecordLayout,
}

impl SaveLayout {
    /// The retail EEPROM layout
    pub const V1: SaveLayout = SaveLayout {
        version: 1,
        num_save_files: NUM_SAVE_FILES,
        copies: COPIES_PER_RECORD,
        save_file: &SAVE_FILE_LAYOUT,
        menu_data: &MENU_DATA_LAYOUT,
    };

    pub const CURRENT: SaveLayout = Self::V1;

    /// Bytes occupied by every save file copy; menu data follows
    pub const fn save_files_size(&self) -> usize {
        self.num_save_files * self.copies * self.save_file.size
    }

    pub const fn total_size(&self) -> usize {
        self.save_files_size() + self.copies * self.menu_data.size
    }

    pub fn record_offset(&self, id: RecordId) -> usize {
        match id {
            RecordId::SaveFile { slot, copy } => {
                (slot.index() * self.copies + copy.index()) * self.save_file.size
            }
            RecordId::MenuData { copy } => {
                self.save_files_size() + copy.index() * self.menu_data.size
            }
        }
    }

    pub fn record_range(&self, id: RecordId) -> Range<usize> {
        let start = self.record_offset(id);
        start..start + id.layout().size
    }
}

const _: () = assert!(SaveLayout::CURRENT.total_size() == EEPROM_SIZE);
