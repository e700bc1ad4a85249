// src/layout/mod.rs
//! Fixed on-disk layout of the 512-byte EEPROM save image.
//!
//! Offsets are pinned explicitly rather than derived from any in-memory struct,
//! so the layout is identical on every host regardless of its alignment rules.

mod field;
mod record;
mod save_layout;

pub use field::FieldDescriptor;
pub use record::{
    RecordLayout, SignatureLayout, MENU_DATA_LAYOUT, MENU_DATA_MAGIC, SAVE_FILE_LAYOUT,
    SAVE_FILE_MAGIC,
};
pub use save_layout::SaveLayout;

/// Number of user save slots
pub const NUM_SAVE_FILES: usize = 4;

/// Courses tracked in the star bitmask array
pub const COURSE_COUNT: usize = 25;

/// Courses that keep a coin high score
pub const COURSE_STAGES_COUNT: usize = 15;

/// Size of the whole save image
pub const EEPROM_SIZE: usize = 0x200;

/// Magic (u16) followed by checksum (u16)
pub const SIGNATURE_SIZE: usize = 4;

/// Copies kept of each record (primary and backup)
pub const COPIES_PER_RECORD: usize = 2;

/// Size of one save file record
pub const SAVE_FILE_SIZE: usize = 1 // cap_level
    + 1 // cap_area
    + 3 * 2 // cap_pos
    + 4 // flags
    + COURSE_COUNT
    + COURSE_STAGES_COUNT
    + SIGNATURE_SIZE;

/// Padding in the menu record. Half of the EEPROM holds one copy of every save
/// file plus one menu record; the filler takes whatever the other menu fields
/// leave over.
pub const MENU_DATA_FILLER_SIZE: usize = EEPROM_SIZE / 2
    - (2 * 2 + SIGNATURE_SIZE)
    - NUM_SAVE_FILES * (4 + SAVE_FILE_SIZE);

/// Size of one main menu record
pub const MENU_DATA_SIZE: usize = NUM_SAVE_FILES * 4 // coin_score_ages
    + 2 // sound_mode
    + 2 // language
    + MENU_DATA_FILLER_SIZE
    + SIGNATURE_SIZE;

const _: () = assert!(SAVE_FILE_SIZE == 56);
const _: () = assert!(SAVE_FILE_SIZE % 4 == 0);
const _: () = assert!(MENU_DATA_SIZE % 4 == 0);
const _: () = assert!(NUM_SAVE_FILES * SAVE_FILE_SIZE + MENU_DATA_SIZE == EEPROM_SIZE / 2);
const _: () = assert!(
    COPIES_PER_RECORD * (NUM_SAVE_FILES * SAVE_FILE_SIZE + MENU_DATA_SIZE) == EEPROM_SIZE
);
