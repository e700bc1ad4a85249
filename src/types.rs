// src/types.rs
use crate::layout::{RecordLayout, MENU_DATA_LAYOUT, NUM_SAVE_FILES, SAVE_FILE_LAYOUT};
use std::fmt;
use std::str::FromStr;

/// Byte order of a save image or of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the machine running the conversion
    pub const fn host() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    pub const fn from_is_little(little: bool) -> Self {
        if little {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    pub const fn is_little(&self) -> bool {
        matches!(self, Endianness::Little)
    }

    pub const fn opposite(&self) -> Self {
        match self {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endianness::Little => "little",
            Endianness::Big => "big",
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endianness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "little" | "le" => Ok(Endianness::Little),
            "big" | "be" => Ok(Endianness::Big),
            other => Err(format!("unknown byte order '{}' (expected little or big)", other)),
        }
    }
}

/// The two record types stored in a save buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    SaveFile,
    MenuData,
}

impl RecordKind {
    pub fn layout(&self) -> &'static RecordLayout {
        match self {
            RecordKind::SaveFile => &SAVE_FILE_LAYOUT,
            RecordKind::MenuData => &MENU_DATA_LAYOUT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RecordKind::SaveFile => "save file",
            RecordKind::MenuData => "main menu block",
        }
    }
}

/// Every record is stored twice; the game falls back to the backup when the
/// primary fails its signature check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockCopy {
    Primary,
    Backup,
}

impl BlockCopy {
    pub const BOTH: [BlockCopy; 2] = [BlockCopy::Primary, BlockCopy::Backup];

    pub const fn index(&self) -> usize {
        match self {
            BlockCopy::Primary => 0,
            BlockCopy::Backup => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockCopy::Primary => "primary",
            BlockCopy::Backup => "backup",
        }
    }
}

/// Zero-based index of a user save slot, always below [`NUM_SAVE_FILES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SaveSlot(usize);

impl SaveSlot {
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_SAVE_FILES {
            Some(SaveSlot(index))
        } else {
            None
        }
    }

    pub const fn index(&self) -> usize {
        self.0
    }

    pub fn all() -> impl Iterator<Item = SaveSlot> {
        (0..NUM_SAVE_FILES).map(SaveSlot)
    }
}

impl fmt::Display for SaveSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 + 1)
    }
}

/// Identifies one record within a save buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordId {
    SaveFile { slot: SaveSlot, copy: BlockCopy },
    MenuData { copy: BlockCopy },
}

impl RecordId {
    /// Save file record for a zero-based slot; `None` past the last slot
    pub const fn save_file(slot: usize, copy: BlockCopy) -> Option<RecordId> {
        match SaveSlot::new(slot) {
            Some(slot) => Some(RecordId::SaveFile { slot, copy }),
            None => None,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            RecordId::SaveFile { .. } => RecordKind::SaveFile,
            RecordId::MenuData { .. } => RecordKind::MenuData,
        }
    }

    pub fn copy(&self) -> BlockCopy {
        match self {
            RecordId::SaveFile { copy, .. } | RecordId::MenuData { copy } => *copy,
        }
    }

    pub fn layout(&self) -> &'static RecordLayout {
        self.kind().layout()
    }

    /// Every record in on-disk order: all save file copies, then menu data
    pub fn all() -> impl Iterator<Item = RecordId> {
        let files = SaveSlot::all().flat_map(|slot| {
            BlockCopy::BOTH
                .into_iter()
                .map(move |copy| RecordId::SaveFile { slot, copy })
        });
        let menus = BlockCopy::BOTH
            .into_iter()
            .map(|copy| RecordId::MenuData { copy });
        files.chain(menus)
    }

    /// Records in the order the validator walks them: menu data first
    pub fn validation_order() -> impl Iterator<Item = RecordId> {
        let menus = BlockCopy::BOTH
            .into_iter()
            .map(|copy| RecordId::MenuData { copy });
        menus.chain(Self::all().filter(|id| id.kind() == RecordKind::SaveFile))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::SaveFile { slot, copy } => {
                write!(f, "{} {} {}", copy.name(), RecordKind::SaveFile.name(), slot)
            }
            RecordId::MenuData { copy } => {
                write!(f, "{} {}", copy.name(), RecordKind::MenuData.name())
            }
        }
    }
}
