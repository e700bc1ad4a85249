// src/reader/mod.rs
mod sync_reader;

#[cfg(feature = "async")]
mod async_reader;

pub use sync_reader::{read_save, read_save_from};

#[cfg(feature = "async")]
pub use async_reader::read_save_async;
