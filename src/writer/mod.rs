// src/writer/mod.rs
mod sync_writer;

#[cfg(feature = "async")]
mod async_writer;

pub use sync_writer::{write_save, write_save_to};

#[cfg(feature = "async")]
pub use async_writer::write_save_async;
