// src/layout/record.rs
use super::field::FieldDescriptor;
use super::{
    COURSE_COUNT, COURSE_STAGES_COUNT, MENU_DATA_FILLER_SIZE, MENU_DATA_SIZE, NUM_SAVE_FILES,
    SAVE_FILE_SIZE, SIGNATURE_SIZE,
};

/// Magic of a main menu record ("HI")
pub const MENU_DATA_MAGIC: u16 = 0x4849;

/// Magic of a save file record ("DA")
pub const SAVE_FILE_MAGIC: u16 = 0x4441;

/// Location of the trailing magic/checksum pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureLayout {
    pub magic_offset: usize,
    pub checksum_offset: usize,
}

impl SignatureLayout {
    pub const FIELD_WIDTH: usize = 2;

    /// Signature occupying the last four bytes of a record of `record_size`
    pub const fn trailing(record_size: usize) -> Self {
        SignatureLayout {
            magic_offset: record_size - SIGNATURE_SIZE,
            checksum_offset: record_size - SIGNATURE_SIZE + Self::FIELD_WIDTH,
        }
    }

    pub const fn magic_field(&self) -> FieldDescriptor {
        FieldDescriptor::new("signature.magic", self.magic_offset, Self::FIELD_WIDTH, 1)
    }

    pub const fn checksum_field(&self) -> FieldDescriptor {
        FieldDescriptor::new("signature.chksum", self.checksum_offset, Self::FIELD_WIDTH, 1)
    }
}

/// Layout of one record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    pub name: &'static str,
    pub size: usize,
    /// Payload fields in offset order, signature excluded
    pub fields: &'static [FieldDescriptor],
    pub signature: SignatureLayout,
    /// Magic in the byte order it is defined in
    pub magic: u16,
}

impl RecordLayout {
    pub const fn swapped_magic(&self) -> u16 {
        self.magic.swap_bytes()
    }

    /// Multi-byte payload fields; these are reversed on conversion
    pub fn swap_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.is_swap_sensitive())
    }

    /// Byte arrays carried through conversion unchanged
    pub fn opaque_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| !f.is_swap_sensitive())
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// True when the fields plus signature cover every byte exactly once
    pub const fn is_contiguous(&self) -> bool {
        let mut expected = 0;
        let mut i = 0;
        while i < self.fields.len() {
            if self.fields[i].offset != expected {
                return false;
            }
            expected = self.fields[i].end();
            i += 1;
        }
        expected == self.signature.magic_offset
            && self.signature.checksum_offset == expected + SignatureLayout::FIELD_WIDTH
            && self.signature.checksum_offset + SignatureLayout::FIELD_WIDTH == self.size
    }
}

const SAVE_FILE_FIELDS: [FieldDescriptor; 6] = [
    FieldDescriptor::new("cap_level", 0, 1, 1),
    FieldDescriptor::new("cap_area", 1, 1, 1),
    FieldDescriptor::new("cap_pos", 2, 2, 3),
    FieldDescriptor::new("flags", 8, 4, 1),
    FieldDescriptor::new("course_stars", 12, 1, COURSE_COUNT),
    FieldDescriptor::new("course_coin_scores", 12 + COURSE_COUNT, 1, COURSE_STAGES_COUNT),
];

const MENU_DATA_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor::new("coin_score_ages", 0, 4, NUM_SAVE_FILES),
    FieldDescriptor::new("sound_mode", NUM_SAVE_FILES * 4, 2, 1),
    FieldDescriptor::new("language", NUM_SAVE_FILES * 4 + 2, 2, 1),
    FieldDescriptor::new("filler", NUM_SAVE_FILES * 4 + 4, 1, MENU_DATA_FILLER_SIZE),
];

pub const SAVE_FILE_LAYOUT: RecordLayout = RecordLayout {
    name: "SaveFile",
    size: SAVE_FILE_SIZE,
    fields: &SAVE_FILE_FIELDS,
    signature: SignatureLayout::trailing(SAVE_FILE_SIZE),
    magic: SAVE_FILE_MAGIC,
};

pub const MENU_DATA_LAYOUT: RecordLayout = RecordLayout {
    name: "MainMenuSaveData",
    size: MENU_DATA_SIZE,
    fields: &MENU_DATA_FIELDS,
    signature: SignatureLayout::trailing(MENU_DATA_SIZE),
    magic: MENU_DATA_MAGIC,
};

const _: () = assert!(SAVE_FILE_LAYOUT.is_contiguous());
const _: () = assert!(MENU_DATA_LAYOUT.is_contiguous());
