// src/reader/async_reader.rs
use crate::buffer::SaveBuffer;
use crate::error::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Async counterpart of [`read_save`](super::read_save)
pub async fn read_save_async(path: impl AsRef<Path>) -> Result<SaveBuffer> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "reading save");

    let file = File::open(path).await?;
    let mut data = Vec::with_capacity(SaveBuffer::SIZE + 1);
    file.take(SaveBuffer::SIZE as u64 + 1)
        .read_to_end(&mut data)
        .await?;

    if data.len() > SaveBuffer::SIZE {
        tracing::warn!(
            expected = SaveBuffer::SIZE,
            "input is larger than a save image, ignoring trailing data"
        );
    }

    SaveBuffer::from_slice(&data)
}
