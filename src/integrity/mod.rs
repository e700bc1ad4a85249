// src/integrity/mod.rs
mod checksum;
mod detect;
mod validate;

pub use checksum::checksum;
pub use detect::{detect_source_endianness, detect_source_is_little};
pub use validate::{validate, validate_record, Diagnostic, Fault, ValidationReport};
