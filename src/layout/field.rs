// src/layout/field.rs

/// One field of a fixed-layout record
///
/// `width` is the size of a single element in bytes and `count` the number of
/// elements, so `[u32; 4]` is `width: 4, count: 4` and a 25-byte array is
/// `width: 1, count: 25`. Only fields with `width > 1` change on a byte-order
/// flip; byte arrays are carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub count: usize,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, offset: usize, width: usize, count: usize) -> Self {
        FieldDescriptor { name, offset, width, count }
    }

    /// Total bytes covered by the field
    pub const fn byte_len(&self) -> usize {
        self.width * self.count
    }

    /// Offset one past the last byte of the field
    pub const fn end(&self) -> usize {
        self.offset + self.byte_len()
    }

    pub const fn is_swap_sensitive(&self) -> bool {
        self.width > 1
    }

    /// Byte ranges of each element, in order
    pub fn elements(&self) -> impl Iterator<Item = std::ops::Range<usize>> + '_ {
        (0..self.count).map(move |i| {
            let start = self.offset + i * self.width;
            start..start + self.width
        })
    }
}
