// src/buffer.rs
use crate::error::{Result, SaveError};
use crate::integrity::checksum;
use crate::layout::{SaveLayout, EEPROM_SIZE};
use crate::types::{Endianness, RecordId};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::BytesMut;

/// The whole EEPROM save image
///
/// Always exactly [`EEPROM_SIZE`] bytes. Records are addressed through
/// [`SaveLayout`] offsets, never by reinterpreting memory.
///
/// # Example
///
/// ```
/// use sm64_save_rs::{SaveBuffer, Endianness, validate};
///
/// let save = SaveBuffer::formatted(Endianness::Big);
/// assert!(validate(&save).is_valid());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SaveBuffer {
    data: BytesMut,
}

impl SaveBuffer {
    pub const SIZE: usize = EEPROM_SIZE;

    /// All-zero image; no record carries a valid signature
    pub fn zeroed() -> Self {
        SaveBuffer {
            data: BytesMut::zeroed(Self::SIZE),
        }
    }

    /// Build a buffer from raw bytes
    ///
    /// Fails with [`SaveError::ShortRead`] when fewer than [`Self::SIZE`] bytes
    /// are given. Anything past the end of the image is ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(SaveError::ShortRead {
                expected: Self::SIZE,
                found: bytes.len(),
            });
        }
        Ok(SaveBuffer {
            data: BytesMut::from(&bytes[..Self::SIZE]),
        })
    }

    /// Blank save with every signature written in `order`, as the game
    /// leaves the EEPROM after erasing all files
    pub fn formatted(order: Endianness) -> Self {
        let mut save = Self::zeroed();
        for id in RecordId::all() {
            save.seal(id, order);
        }
        save
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn record(&self, id: RecordId) -> &[u8] {
        &self.data[SaveLayout::CURRENT.record_range(id)]
    }

    pub fn record_mut(&mut self, id: RecordId) -> &mut [u8] {
        &mut self.data[SaveLayout::CURRENT.record_range(id)]
    }

    /// Stored magic of a record, decoded in `order`
    pub fn magic(&self, id: RecordId, order: Endianness) -> u16 {
        let offset = id.layout().signature.magic_offset;
        read_u16(&self.record(id)[offset..], order)
    }

    /// Stored checksum of a record, decoded in `order`
    pub fn stored_checksum(&self, id: RecordId, order: Endianness) -> u16 {
        let offset = id.layout().signature.checksum_offset;
        read_u16(&self.record(id)[offset..], order)
    }

    /// Rewrite a record's magic and checksum in `order`
    pub fn seal(&mut self, id: RecordId, order: Endianness) {
        let layout = id.layout();
        let record = self.record_mut(id);
        write_u16(&mut record[layout.signature.magic_offset..], layout.magic, order);
        let sum = checksum(record);
        write_u16(&mut record[layout.signature.checksum_offset..], sum, order);
    }
}

impl std::fmt::Debug for SaveBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaveBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}

impl AsRef<[u8]> for SaveBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

pub(crate) fn read_u16(bytes: &[u8], order: Endianness) -> u16 {
    match order {
        Endianness::Little => LittleEndian::read_u16(bytes),
        Endianness::Big => BigEndian::read_u16(bytes),
    }
}

pub(crate) fn write_u16(bytes: &mut [u8], value: u16, order: Endianness) {
    match order {
        Endianness::Little => LittleEndian::write_u16(bytes, value),
        Endianness::Big => BigEndian::write_u16(bytes, value),
    }
}
