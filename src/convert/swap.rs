// src/convert/swap.rs
use crate::buffer::SaveBuffer;
use crate::layout::{FieldDescriptor, RecordLayout};
use crate::types::RecordId;
use crate::utils::swap_endianness;

/// Reverse every element of one field in place
pub fn swap_field(record: &mut [u8], field: &FieldDescriptor) {
    swap_endianness(&mut record[field.offset..field.end()], field.width);
}

/// Flip the byte order of one record in place
///
/// Multi-byte payload fields are reversed element by element, byte arrays are
/// left alone, and the signature's magic and checksum go last. Applying it
/// twice restores the original bytes.
///
/// # Panics
///
/// Panics if `record` is not exactly `layout.size` bytes long.
pub fn swap_record(record: &mut [u8], layout: &RecordLayout) {
    assert_eq!(
        record.len(),
        layout.size,
        "{} record must be {} bytes",
        layout.name,
        layout.size
    );

    for field in layout.swap_fields() {
        swap_field(record, field);
    }
    swap_field(record, &layout.signature.magic_field());
    swap_field(record, &layout.signature.checksum_field());
}

/// Flip the byte order of every record in the save
pub fn swap_all(buffer: &mut SaveBuffer) {
    for id in RecordId::validation_order() {
        swap_record(buffer.record_mut(id), id.layout());
        tracing::trace!(record = %id, "swapped record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{MENU_DATA_LAYOUT, SAVE_FILE_LAYOUT};
    use proptest::prelude::*;

    fn patterned(len: usize) -> Vec<u8> {
        (0..len).map(|i| i as u8 + 1).collect()
    }

    #[test]
    fn test_save_file_field_swaps() {
        let original = patterned(SAVE_FILE_LAYOUT.size);
        let mut record = original.clone();
        swap_record(&mut record, &SAVE_FILE_LAYOUT);

        // cap_level, cap_area
        assert_eq!(record[0..2], original[0..2]);
        // cap_pos: three independent u16s
        assert_eq!(record[2..8], [original[3], original[2], original[5], original[4], original[7], original[6]]);
        // flags
        assert_eq!(record[8..12], [original[11], original[10], original[9], original[8]]);
        // course_stars and course_coin_scores are bytes
        assert_eq!(record[12..52], original[12..52]);
        // signature
        assert_eq!(record[52..56], [original[53], original[52], original[55], original[54]]);
    }

    #[test]
    fn test_menu_data_field_swaps() {
        let original = patterned(MENU_DATA_LAYOUT.size);
        let mut record = original.clone();
        swap_record(&mut record, &MENU_DATA_LAYOUT);

        for age in 0..4 {
            let base = age * 4;
            let expected: Vec<u8> = original[base..base + 4].iter().rev().copied().collect();
            assert_eq!(record[base..base + 4], expected[..]);
        }
        assert_eq!(record[16..20], [original[17], original[16], original[19], original[18]]);
        // filler
        assert_eq!(record[20..28], original[20..28]);
        assert_eq!(record[28..32], [original[29], original[28], original[31], original[30]]);
    }

    #[test]
    #[should_panic(expected = "SaveFile record must be 56 bytes")]
    fn test_wrong_length_panics() {
        let mut record = vec![0u8; 10];
        swap_record(&mut record, &SAVE_FILE_LAYOUT);
    }

    proptest! {
        #[test]
        fn prop_swap_record_is_involution(bytes in proptest::collection::vec(any::<u8>(), 56)) {
            let mut record = bytes.clone();
            swap_record(&mut record, &SAVE_FILE_LAYOUT);
            swap_record(&mut record, &SAVE_FILE_LAYOUT);
            prop_assert_eq!(record, bytes);
        }

        #[test]
        fn prop_swap_all_is_involution(bytes in proptest::collection::vec(any::<u8>(), 512)) {
            let original = SaveBuffer::from_slice(&bytes).unwrap();
            let mut save = original.clone();
            swap_all(&mut save);
            swap_all(&mut save);
            prop_assert_eq!(save, original);
        }
    }
}
