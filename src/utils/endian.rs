// src/utils/endian.rs

/// Reverse the byte order of each `width`-byte element of `bytes` in place
///
/// A trailing partial element is left untouched.
pub fn swap_endianness(bytes: &mut [u8], width: usize) {
    if width <= 1 {
        return;
    }

    for chunk in bytes.chunks_exact_mut(width) {
        chunk.reverse();
    }
}
