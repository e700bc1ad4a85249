// src/writer/async_writer.rs
use crate::buffer::SaveBuffer;
use crate::error::{Result, SaveError};
use std::path::Path;

/// Async counterpart of [`write_save`](super::write_save)
pub async fn write_save_async(path: impl AsRef<Path>, save: &SaveBuffer) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "writing save");

    tokio::fs::write(path, save.as_bytes())
        .await
        .map_err(|source| SaveError::Write {
            target: path.display().to_string(),
            source,
        })
}
