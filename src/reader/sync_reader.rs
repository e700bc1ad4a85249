// src/reader/sync_reader.rs
use crate::buffer::SaveBuffer;
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Read a save image from a file
pub fn read_save(path: impl AsRef<Path>) -> Result<SaveBuffer> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading save");
    let file = File::open(path)?;
    read_save_from(BufReader::new(file))
}

/// Read exactly one save image from a stream
///
/// Fails with [`SaveError::ShortRead`](crate::SaveError::ShortRead) if the
/// stream ends early. At most one byte past the image is consumed, only to
/// warn that the input was larger than expected.
pub fn read_save_from<R: Read>(reader: R) -> Result<SaveBuffer> {
    let mut data = Vec::with_capacity(SaveBuffer::SIZE + 1);
    reader
        .take(SaveBuffer::SIZE as u64 + 1)
        .read_to_end(&mut data)?;

    if data.len() > SaveBuffer::SIZE {
        tracing::warn!(
            expected = SaveBuffer::SIZE,
            "input is larger than a save image, ignoring trailing data"
        );
    }

    SaveBuffer::from_slice(&data)
}
