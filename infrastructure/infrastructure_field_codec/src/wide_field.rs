//! Wide Field Module
//!
//! Materializes bit fields of any width as arbitrary-precision integers.
//! Extraction has no upper width limit, so a parser pulling a 96-bit
//! identifier or a 256-bit tag out of a packet lands here instead of
//! [`read_field`](crate::read_field), which caps at 64 bits.
//!
//! Uses the `malachite` crate for arbitrary-precision arithmetic.

use malachite::Integer;

use entities_bit_fields::extract::{extract, extract_within, ExtractError};
use entities_bit_fields::flags;

/// Compose extracted bytes into a non-negative integer, least significant
/// byte first with a running power-of-256 multiplier.
fn fold_wide(bits: &[u8]) -> Integer {
    let mut value = Integer::from(0);
    let mut multiplier = Integer::from(1u64);
    for &byte in bits.iter().rev() {
        value += Integer::from(byte) * &multiplier;
        multiplier *= Integer::from(256u64);
    }
    value
}

/// Read a field of any width starting at `start_bit` as an unsigned integer.
///
/// # Arguments
/// * `src` - The byte range the indices are relative to
/// * `start_bit` - Index of the field's least significant bit
/// * `num_bits` - Field width in bits, at least 1
///
/// # Returns
/// * `Ok(Integer)` - The field value, non-negative
/// * `Err(ExtractError)` - The underlying extraction failed
pub fn read_unsigned_wide(
    src: &[u8],
    start_bit: usize,
    num_bits: usize,
) -> Result<Integer, ExtractError> {
    let bits = extract(src, start_bit, num_bits)?;
    Ok(fold_wide(&bits))
}

/// [`read_unsigned_wide`] over the `(offset, len)` sub-range of a buffer.
pub fn read_unsigned_wide_within(
    src: &[u8],
    offset: usize,
    len: usize,
    start_bit: usize,
    num_bits: usize,
) -> Result<Integer, ExtractError> {
    let bits = extract_within(src, offset, len, start_bit, num_bits)?;
    Ok(fold_wide(&bits))
}

/// Read a field of any width starting at `start_bit` as a signed integer.
///
/// The field's most significant bit is its sign bit; if set, the value is
/// reinterpreted as two's complement at the field's own width (the unsigned
/// reading minus `2^num_bits`).
///
/// # Arguments
/// * `src` - The byte range the indices are relative to
/// * `start_bit` - Index of the field's least significant bit
/// * `num_bits` - Field width in bits, at least 1
///
/// # Returns
/// * `Ok(Integer)` - The field value
/// * `Err(ExtractError)` - The underlying extraction failed
pub fn read_signed_wide(
    src: &[u8],
    start_bit: usize,
    num_bits: usize,
) -> Result<Integer, ExtractError> {
    let bits = extract(src, start_bit, num_bits)?;
    fold_wide_signed(&bits, num_bits)
}

/// [`read_signed_wide`] over the `(offset, len)` sub-range of a buffer.
pub fn read_signed_wide_within(
    src: &[u8],
    offset: usize,
    len: usize,
    start_bit: usize,
    num_bits: usize,
) -> Result<Integer, ExtractError> {
    let bits = extract_within(src, offset, len, start_bit, num_bits)?;
    fold_wide_signed(&bits, num_bits)
}

fn fold_wide_signed(bits: &[u8], num_bits: usize) -> Result<Integer, ExtractError> {
    let negative = flags::is_set(bits, num_bits - 1)?;
    let mut value = fold_wide(bits);
    if negative {
        // Two's complement at the field's own width: subtract 2^num_bits.
        value -= &Integer::from(1u64) << (num_bits as u64);
    }
    Ok(value)
}
