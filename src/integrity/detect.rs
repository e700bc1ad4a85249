// src/integrity/detect.rs
use crate::buffer::SaveBuffer;
use crate::layout::MENU_DATA_MAGIC;
use crate::types::{BlockCopy, Endianness, RecordId};

/// Byte order the save was written in
///
/// Decodes the primary menu record's magic the way `host` would read it. A
/// match with [`MENU_DATA_MAGIC`] means the save is already in host order,
/// anything else means the opposite. The buffer must have passed
/// [`validate`](super::validate); this is not re-checked here.
pub fn detect_source_endianness(buffer: &SaveBuffer, host: Endianness) -> Endianness {
    let magic = buffer.magic(RecordId::MenuData { copy: BlockCopy::Primary }, host);
    let source = if magic == MENU_DATA_MAGIC {
        host
    } else {
        host.opposite()
    };
    tracing::debug!(magic = format_args!("{:#06x}", magic), %host, %source, "detected save byte order");
    source
}

/// Boolean view of [`detect_source_endianness`]: true when the save is
/// little-endian
pub fn detect_source_is_little(buffer: &SaveBuffer, host_is_little: bool) -> bool {
    detect_source_endianness(buffer, Endianness::from_is_little(host_is_little)).is_little()
}
