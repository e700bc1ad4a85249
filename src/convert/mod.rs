// src/convert/mod.rs
mod converter;
mod swap;

pub use converter::{Conversion, ConvertConfig, SaveConverter};
pub use swap::{swap_all, swap_field, swap_record};
