// src/writer/sync_writer.rs
use crate::buffer::SaveBuffer;
use crate::error::{Result, SaveError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the whole save image to a file, replacing its contents
pub fn write_save(path: impl AsRef<Path>, save: &SaveBuffer) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "writing save");

    let write = || -> io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(save.as_bytes())?;
        file.flush()?;
        file.get_ref().sync_all()
    };

    write().map_err(|source| SaveError::Write {
        target: path.display().to_string(),
        source,
    })
}

/// Write the whole save image to a stream
pub fn write_save_to<W: Write>(mut writer: W, save: &SaveBuffer) -> Result<()> {
    writer
        .write_all(save.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|source| SaveError::Write {
            target: "stream".to_string(),
            source,
        })
}
