// src/lib.rs
//! # sm64-save-rs
//!
//! Validate and byte-swap Super Mario 64 EEPROM save files so they can move
//! between big-endian hardware (the console, flash carts) and little-endian
//! hosts (emulators, PC ports).
//!
//! ## Features
//!
//! - ✅ **Checked**: every record's magic and checksum is verified before anything is touched
//! - 🔁 **Either direction**: the source byte order is detected from the save itself
//! - 📐 **Explicit layout**: field offsets are pinned in tables, never taken from struct layout
//! - 🧾 **Full diagnostics**: all corrupted records are reported in one pass
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sm64_save_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut save = read_save("mario.eep")?;
//!
//!     let conversion = SaveConverter::default().convert(&mut save)?;
//!     println!("{} endian -> {} endian", conversion.source, conversion.target);
//!
//!     write_save("mario.eep", &save)?;
//!     Ok(())
//! }
//! ```
//!
//! ### Inspecting a save without converting it
//!
//! ```rust
//! use sm64_save_rs::*;
//!
//! let save = SaveBuffer::formatted(Endianness::Big);
//! let report = validate(&save);
//! assert!(report.is_valid());
//! assert_eq!(detect_source_endianness(&save, Endianness::Little), Endianness::Big);
//! ```
//!
//! ### Async I/O
//!
//! ```rust,no_run
//! # #[cfg(feature = "async")]
//! use sm64_save_rs::*;
//!
//! # #[cfg(feature = "async")]
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut save = read_save_async("mario.eep").await?;
//!     SaveConverter::default().convert(&mut save)?;
//!     write_save_async("mario_le.eep", &save).await?;
//!     Ok(())
//! }
//! ```

// Modules
pub mod error;
pub mod types;
pub mod layout;
pub mod buffer;
pub mod integrity;
pub mod convert;
pub mod reader;
pub mod writer;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{SaveError, Result};

// Type exports
pub use types::{
    BlockCopy,
    Endianness,
    RecordId,
    RecordKind,
    SaveSlot,
};

// Layout exports
pub use layout::{
    FieldDescriptor,
    RecordLayout,
    SaveLayout,
    SignatureLayout,
    EEPROM_SIZE,
    MENU_DATA_MAGIC,
    NUM_SAVE_FILES,
    SAVE_FILE_MAGIC,
};

pub use buffer::SaveBuffer;

// Integrity exports
pub use integrity::{
    checksum,
    detect_source_endianness,
    detect_source_is_little,
    validate,
    Diagnostic,
    Fault,
    ValidationReport,
};

// Conversion exports
pub use convert::{
    swap_all,
    swap_record,
    Conversion,
    ConvertConfig,
    SaveConverter,
};

// I/O exports
pub use reader::{read_save, read_save_from};
pub use writer::{write_save, write_save_to};

#[cfg(feature = "async")]
pub use reader::read_save_async;
#[cfg(feature = "async")]
pub use writer::write_save_async;

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use sm64_save_rs::prelude::*;
    //! ```

    pub use crate::error::{SaveError, Result};
    pub use crate::types::{Endianness, RecordId};
    pub use crate::buffer::SaveBuffer;
    pub use crate::convert::{ConvertConfig, SaveConverter};
    pub use crate::reader::read_save;
    pub use crate::writer::write_save;
}

/// Version of the on-disk layout this library implements
pub const LAYOUT_VERSION: u32 = SaveLayout::CURRENT.version;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
