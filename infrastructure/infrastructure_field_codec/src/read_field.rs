//! Read Field Module
//!
//! Materializes an extracted bit field of up to 64 bits as a `u64` or `i64`.
//! Extraction itself, and the bit numbering the start index follows, are the
//! entities layer's ([`entities_bit_fields::extract`]).

use entities_bit_fields::cursor::ByteCursor;
use entities_bit_fields::extract::{extract, extract_within, ExtractError};
use entities_bit_fields::flags;

/// Widest field a 64-bit materialization can hold.
pub const MAX_FIELD_BITS: usize = 64;

/// Field materialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadFieldError {
    /// Requested width exceeds 64 bits
    FieldTooWide { num_bits: usize },
    /// The underlying extraction failed
    Extract(ExtractError),
}

impl From<ExtractError> for ReadFieldError {
    fn from(err: ExtractError) -> Self {
        ReadFieldError::Extract(err)
    }
}

fn check_width(num_bits: usize) -> Result<(), ReadFieldError> {
    if num_bits > MAX_FIELD_BITS {
        return Err(ReadFieldError::FieldTooWide { num_bits });
    }
    Ok(())
}

/// Compose extracted bytes into a zero-extended 64-bit value.
///
/// The last extracted byte lands at bit positions 0-7, the one before it at
/// 8-15, and so on; unused high bits stay zero.
fn fold_unsigned(bits: &[u8]) -> u64 {
    bits.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

/// Compose extracted bytes into a sign-extended 64-bit value.
///
/// Two fixed starting accumulators: all-zeros when the field's sign bit is
/// clear, all-ones when it is set. Each extracted byte then overlays exactly
/// its own 8-bit slot, so a 64-bit field replaces every slot including bits
/// 56-63 and leaves no residual pre-fill.
fn fold_signed(mut bits: Vec<u8>, num_bits: usize) -> Result<i64, ReadFieldError> {
    let negative = flags::is_set(&bits, num_bits - 1).map_err(ExtractError::from)?;
    let mut acc: u64 = if negative {
        let spanning = (num_bits % 8) as u32;
        if spanning != 0 {
            // Sign-extend the top byte so its pad bits overlay as ones.
            bits[0] |= 0xFF << spanning;
        }
        u64::MAX
    } else {
        0
    };
    for (slot, &byte) in bits.iter().rev().enumerate() {
        let shift = (slot * 8) as u32;
        acc = (acc & !(0xFFu64 << shift)) | (u64::from(byte) << shift);
    }
    Ok(acc as i64)
}

/// Read up to 64 bits starting at `start_bit` as an unsigned value.
///
/// # Arguments
/// * `src` - The byte range the indices are relative to
/// * `start_bit` - Index of the field's least significant bit
/// * `num_bits` - Field width in bits, 1..=64
///
/// # Returns
/// * `Ok(u64)` - The zero-extended field value
/// * `Err(ReadFieldError)` - Width over 64 bits, or extraction failure
pub fn read_unsigned(src: &[u8], start_bit: usize, num_bits: usize) -> Result<u64, ReadFieldError> {
    check_width(num_bits)?;
    let bits = extract(src, start_bit, num_bits)?;
    Ok(fold_unsigned(&bits))
}

/// [`read_unsigned`] over the `(offset, len)` sub-range of a buffer.
pub fn read_unsigned_within(
    src: &[u8],
    offset: usize,
    len: usize,
    start_bit: usize,
    num_bits: usize,
) -> Result<u64, ReadFieldError> {
    check_width(num_bits)?;
    let bits = extract_within(src, offset, len, start_bit, num_bits)?;
    Ok(fold_unsigned(&bits))
}

/// [`read_unsigned`] over the `len`-byte sub-range at the cursor's position.
pub fn read_unsigned_at(
    cursor: &ByteCursor,
    len: usize,
    start_bit: usize,
    num_bits: usize,
) -> Result<u64, ReadFieldError> {
    read_unsigned_within(cursor.data(), cursor.position(), len, start_bit, num_bits)
}

/// Read up to 64 bits starting at `start_bit` as a signed value.
///
/// The field's own most significant bit (local position `num_bits - 1`) is
/// its sign bit; if set, the value is sign-extended all the way to bit 63.
///
/// # Arguments
/// * `src` - The byte range the indices are relative to
/// * `start_bit` - Index of the field's least significant bit
/// * `num_bits` - Field width in bits, 1..=64
///
/// # Returns
/// * `Ok(i64)` - The sign-extended field value
/// * `Err(ReadFieldError)` - Width over 64 bits, or extraction failure
pub fn read_signed(src: &[u8], start_bit: usize, num_bits: usize) -> Result<i64, ReadFieldError> {
    check_width(num_bits)?;
    let bits = extract(src, start_bit, num_bits)?;
    fold_signed(bits, num_bits)
}

/// [`read_signed`] over the `(offset, len)` sub-range of a buffer.
pub fn read_signed_within(
    src: &[u8],
    offset: usize,
    len: usize,
    start_bit: usize,
    num_bits: usize,
) -> Result<i64, ReadFieldError> {
    check_width(num_bits)?;
    let bits = extract_within(src, offset, len, start_bit, num_bits)?;
    fold_signed(bits, num_bits)
}

/// [`read_signed`] over the `len`-byte sub-range at the cursor's position.
pub fn read_signed_at(
    cursor: &ByteCursor,
    len: usize,
    start_bit: usize,
    num_bits: usize,
) -> Result<i64, ReadFieldError> {
    read_signed_within(cursor.data(), cursor.position(), len, start_bit, num_bits)
}
