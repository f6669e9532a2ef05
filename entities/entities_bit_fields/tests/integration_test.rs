//! Integration tests for entities_bit_fields crate
//!
//! These tests verify that the addressing convention, flag operations, and
//! extraction engine agree with each other end to end.

use entities_bit_fields::extract::{extract, extract_signed, extract_within};
use entities_bit_fields::flags::{is_set, is_set_at, is_set_within, set_bit, unset_bit};
use entities_bit_fields::ByteCursor;

const WIRE: [u8; 8] = [0x80, 0x71, 0x6F, 0x5E, 0x4D, 0x3C, 0x2B, 0x1A];

#[test]
fn test_extraction_agrees_with_single_bit_reads() {
    // Bit j of an extracted field must be bit index + j of the source, for
    // every starting index and a spread of widths. Both sides go through the
    // same addressing convention, so this pins the two consumers together.
    for index in 0..64usize {
        for num_bits in [1, 3, 7, 8, 9, 12, 16, 17].iter().copied() {
            if index + num_bits > 64 {
                continue;
            }
            let field = extract(&WIRE, index, num_bits).unwrap();
            for j in 0..num_bits {
                assert_eq!(
                    is_set(&field, j).unwrap(),
                    is_set(&WIRE, index + j).unwrap(),
                    "index {} width {} bit {}", index, num_bits, j
                );
            }
            // Pad bits above the field are zero.
            for j in num_bits..field.len() * 8 {
                assert!(!is_set(&field, j).unwrap());
            }
        }
    }
}

#[test]
fn test_sign_extension_only_touches_pad_bits() {
    for index in 0..32usize {
        for num_bits in [2, 3, 5, 9, 11, 16].iter().copied() {
            if index + num_bits > 64 {
                continue;
            }
            let plain = extract(&WIRE, index, num_bits).unwrap();
            let signed = extract_signed(&WIRE, index, num_bits).unwrap();
            assert_eq!(plain.len(), signed.len());
            // Data bits identical either way.
            for j in 0..num_bits {
                assert_eq!(is_set(&plain, j).unwrap(), is_set(&signed, j).unwrap());
            }
            // Pad bits equal the sign bit.
            let sign = is_set(&plain, num_bits - 1).unwrap();
            for j in num_bits..signed.len() * 8 {
                assert_eq!(is_set(&signed, j).unwrap(), sign);
            }
        }
    }
}

#[test]
fn test_set_then_extract_round_trip() {
    // Writing bits through the flag operations and reading them back through
    // extraction reproduces the written pattern.
    let mut buf = vec![0u8; 4];
    for index in [0usize, 3, 8, 13, 21, 31] {
        set_bit(&mut buf, index).unwrap();
    }
    let all = extract(&buf, 0, 32).unwrap();
    assert_eq!(all, buf);

    for index in [0usize, 3, 8, 13, 21, 31] {
        assert!(is_set(&buf, index).unwrap());
        unset_bit(&mut buf, index).unwrap();
    }
    assert_eq!(buf, vec![0u8; 4]);
}

#[test]
fn test_every_bit_of_a_buffer_can_be_flipped() {
    let mut buf = vec![0u8; 3];
    for index in 0..24 {
        set_bit(&mut buf, index).unwrap();
        assert!(is_set(&buf, index).unwrap());
    }
    assert_eq!(buf, vec![0xFF; 3]);
    for index in 0..24 {
        unset_bit(&mut buf, index).unwrap();
    }
    assert_eq!(buf, vec![0x00; 3]);
}

#[test]
fn test_windowed_views_agree() {
    // Explicit (offset, len) windows, hand subslicing, and cursor positions
    // all address the same bits.
    let buf = vec![0xDEu8, 0xAD, 0xBE, 0xEF, 0x42];
    let mut cursor = ByteCursor::new(buf.clone());
    cursor.set_position(2).unwrap();

    for index in 0..24 {
        let direct = is_set(&buf[2..5], index).unwrap();
        assert_eq!(is_set_within(&buf, 2, 3, index).unwrap(), direct);
        assert_eq!(is_set_at(&cursor, 3, index).unwrap(), direct);
    }

    assert_eq!(
        extract_within(&buf, 2, 3, 6, 10).unwrap(),
        extract(&buf[2..5], 6, 10).unwrap()
    );
}

#[test]
fn test_failed_calls_leave_the_buffer_alone() {
    let mut buf = vec![0x5Au8, 0xA5];
    assert!(set_bit(&mut buf, 16).is_err());
    assert!(unset_bit(&mut buf, 16).is_err());
    assert!(extract(&buf, 0, 17).is_err());
    assert!(extract(&buf, 0, 0).is_err());
    assert_eq!(buf, vec![0x5A, 0xA5]);
}

#[test]
fn test_single_byte_flag_scenario() {
    let mut buf = [0x80u8];
    assert!(is_set(&buf, 7).unwrap());
    assert!(!is_set(&buf, 0).unwrap());
    unset_bit(&mut buf, 7).unwrap();
    assert_eq!(buf, [0x00]);
}
