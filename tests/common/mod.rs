// tests/common/mod.rs
#![allow(dead_code)]

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use sm64_save_rs::*;
use std::path::PathBuf;

fn put_u16(bytes: &mut [u8], value: u16, order: Endianness) {
    match order {
        Endianness::Little => LittleEndian::write_u16(bytes, value),
        Endianness::Big => BigEndian::write_u16(bytes, value),
    }
}

fn put_u32(bytes: &mut [u8], value: u32, order: Endianness) {
    match order {
        Endianness::Little => LittleEndian::write_u32(bytes, value),
        Endianness::Big => BigEndian::write_u32(bytes, value),
    }
}

fn offset(kind: RecordKind, name: &str) -> usize {
    kind.layout().field(name).unwrap().offset
}

/// A save with every field holding a distinct non-trivial value, written in `order`
pub fn populated_save(order: Endianness) -> SaveBuffer {
    let mut save = SaveBuffer::zeroed();

    for id in RecordId::all() {
        let record = save.record_mut(id);
        match id {
            RecordId::SaveFile { slot, copy } => {
                let slot = slot.index();
                let kind = RecordKind::SaveFile;
                record[offset(kind, "cap_level")] = slot as u8 + 1;
                record[offset(kind, "cap_area")] = copy.index() as u8 + 1;

                let pos = offset(kind, "cap_pos");
                for (i, value) in [0x0102u16 + slot as u16, 0xFF38, 0x1234].iter().enumerate() {
                    put_u16(&mut record[pos + i * 2..], *value, order);
                }
                put_u32(&mut record[offset(kind, "flags")..], 0x00A1_B2C3 + slot as u32, order);

                let stars = kind.layout().field("course_stars").unwrap();
                for (i, byte) in record[stars.offset..stars.end()].iter_mut().enumerate() {
                    *byte = (i as u8).wrapping_mul(7) | 0x01;
                }
                let coins = kind.layout().field("course_coin_scores").unwrap();
                for (i, byte) in record[coins.offset..coins.end()].iter_mut().enumerate() {
                    *byte = 100 + i as u8;
                }
            }
            RecordId::MenuData { .. } => {
                let kind = RecordKind::MenuData;
                let ages = offset(kind, "coin_score_ages");
                for i in 0..NUM_SAVE_FILES {
                    put_u32(&mut record[ages + i * 4..], 0x1020_3040 + i as u32, order);
                }
                put_u16(&mut record[offset(kind, "sound_mode")..], 0x0102, order);
                put_u16(&mut record[offset(kind, "language")..], 0x0003, order);
            }
        }
        save.seal(id, order);
    }

    save
}

pub fn setup_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

pub fn write_raw(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Overwrite a record's checksum with a value matching neither byte order
/// of the correct sum; returns the value written (big-endian)
pub fn corrupt_checksum(save: &mut SaveBuffer, id: RecordId) -> u16 {
    let offset = id.layout().signature.checksum_offset;
    let computed = checksum(save.record(id));
    let mut bad = computed.wrapping_add(1);
    while bad == computed || bad == computed.swap_bytes() {
        bad = bad.wrapping_add(1);
    }
    save.record_mut(id)[offset..offset + 2].copy_from_slice(&bad.to_be_bytes());
    bad
}
