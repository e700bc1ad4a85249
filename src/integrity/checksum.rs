// src/integrity/checksum.rs

/// 16-bit wrapping sum of every byte of a record except its trailing checksum
///
/// The sum runs over raw bytes rather than decoded integers, so it is the same
/// whichever byte order wrote the record. Slices shorter than the checksum
/// field sum to zero.
pub fn checksum(record: &[u8]) -> u16 {
    let covered = record.len().saturating_sub(2);
    record[..covered]
        .iter()
        .fold(0u16, |sum, &byte| sum.wrapping_add(byte as u16))
}
