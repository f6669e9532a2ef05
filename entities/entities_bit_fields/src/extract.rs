//! Range Extraction Module
//!
//! The cross-byte-boundary extraction engine: given a byte range, a starting
//! bit index, and a bit count, produce the minimal-length byte sequence
//! holding those bits, zero-padded ([`extract`]) or two's-complement
//! sign-extended ([`extract_signed`]).
//!
//! ## Overview
//!
//! A field of arbitrary width and arbitrary starting offset rarely lines up
//! with byte boundaries. When it does not, every result byte is assembled from
//! two adjacent source bytes: the low `8 - shift` bits of one, right-shifted,
//! combined with the high `shift` bits of its more significant neighbour,
//! left-shifted. The assembly walks from the least significant result byte
//! upward and never reads outside the requested range; at the most significant
//! edge of the range, where no further source byte exists, an explicit
//! boundary branch supplies zero bits.
//!
//! Results are freshly allocated, `ceil(num_bits / 8)` bytes, big-endian,
//! left-padded: the bits beyond `num_bits` in the first result byte are zero
//! (unsigned) or copies of the field's own sign bit (signed) - never data.
//!
//! Bit indices follow the crate-wide numbering described in
//! [`addressing`](crate::addressing): bit 0 is the least significant bit of
//! the last byte of the range.
//!
//! ## Examples
//!
//! ```rust
//! use entities_bit_fields::extract::{extract, extract_signed};
//!
//! let buf = [0x12u8, 0x34, 0x56];
//!
//! // Twelve bits starting at bit 5: spans all three bytes of arithmetic.
//! assert_eq!(extract(&buf, 5, 12).unwrap(), vec![0x01, 0xA2]);
//!
//! // A 3-bit field reading 0b101 is -3 once sign-extended.
//! let field = extract_signed(&[0x05], 0, 3).unwrap();
//! assert_eq!(field, vec![0xFD]);
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Bit Field Codec Project 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use crate::addressing::{field_bytes, window, BitAddressError};
use crate::flags;

/// Extraction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Requested bit count of zero
    EmptyField,
    /// Starting bit index outside `[0, len*8 - 1]`
    StartBitOutOfRange { index: usize, bit_len: usize },
    /// `index + num_bits` exceeds the range width
    FieldOverrun {
        index: usize,
        num_bits: usize,
        bit_len: usize,
    },
    /// Explicit sub-range `(offset, len)` outside the buffer
    WindowOutOfBounds {
        offset: usize,
        len: usize,
        buf_len: usize,
    },
}

impl From<BitAddressError> for ExtractError {
    fn from(err: BitAddressError) -> Self {
        match err {
            BitAddressError::IndexOutOfRange { index, bit_len } => {
                ExtractError::StartBitOutOfRange { index, bit_len }
            }
            BitAddressError::WindowOutOfBounds {
                offset,
                len,
                buf_len,
            } => ExtractError::WindowOutOfBounds {
                offset,
                len,
                buf_len,
            },
        }
    }
}

/// Extract `num_bits` bits starting at `index`, zero-padded.
///
/// The result is a freshly allocated big-endian byte sequence of
/// `ceil(num_bits / 8)` bytes whose unused high-order bits are zero. Bit 0 of
/// the result is bit `index` of the source.
///
/// # Arguments
/// * `src` - The byte range the indices are relative to
/// * `index` - Index of the field's least significant bit
/// * `num_bits` - Field width in bits, at least 1
///
/// # Returns
/// * `Ok(Vec<u8>)` - The extracted field
/// * `Err(ExtractError)` - Zero width, start bit out of range, or the field
///   overruns the range; the source is never touched on failure
///
/// # Examples
///
/// ```rust
/// use entities_bit_fields::extract::extract;
///
/// let buf = [0xABu8, 0xCD];
/// // Low nibble of the last byte.
/// assert_eq!(extract(&buf, 0, 4).unwrap(), vec![0x0D]);
/// // Eight bits straddling the byte boundary.
/// assert_eq!(extract(&buf, 4, 8).unwrap(), vec![0xBC]);
/// // The full range round-trips.
/// assert_eq!(extract(&buf, 0, 16).unwrap(), vec![0xAB, 0xCD]);
/// ```
pub fn extract(src: &[u8], index: usize, num_bits: usize) -> Result<Vec<u8>, ExtractError> {
    let bit_len = src.len() * 8;
    if num_bits == 0 {
        return Err(ExtractError::EmptyField);
    }
    if index >= bit_len {
        return Err(ExtractError::StartBitOutOfRange { index, bit_len });
    }
    if num_bits > bit_len - index {
        return Err(ExtractError::FieldOverrun {
            index,
            num_bits,
            bit_len,
        });
    }

    let shift = (index % 8) as u32;
    let spanning = (num_bits % 8) as u32;
    let out_len = field_bytes(num_bits);
    let top_mask: u8 = if spanning == 0 { 0xFF } else { (1 << spanning) - 1 };
    // Byte holding the field's least significant bit, in slice order.
    let anchor = src.len() - index / 8 - 1;

    let mut out = vec![0u8; out_len];
    if shift == 0 {
        // Whole-byte alignment: a straight copy of the bytes ending at the
        // anchor, masked below.
        out.copy_from_slice(&src[anchor + 1 - out_len..=anchor]);
    } else {
        let carry = 8 - shift;
        for i in 0..out_len {
            let dst = out_len - 1 - i;
            let src_idx = anchor - i;
            let mut assembled = src[src_idx] >> shift;
            // The most significant result byte may have no source byte to its
            // left; the range edge supplies zero bits instead.
            if src_idx > 0 {
                assembled |= src[src_idx - 1] << carry;
            }
            out[dst] = assembled;
        }
    }
    out[0] &= top_mask;
    Ok(out)
}

/// Extract from the `(offset, len)` sub-range of a buffer.
///
/// The window is validated first; `index` and `num_bits` are then relative to
/// the sub-range, exactly as [`extract`] treats its whole slice.
pub fn extract_within(
    src: &[u8],
    offset: usize,
    len: usize,
    index: usize,
    num_bits: usize,
) -> Result<Vec<u8>, ExtractError> {
    let view = window(src, offset, len)?;
    extract(view, index, num_bits)
}

/// Extract `num_bits` bits starting at `index`, sign-extended.
///
/// Runs [`extract`], then inspects the field's own sign bit (local position
/// `num_bits - 1` within the result). If it is set, the unused high-order bits
/// of the first result byte are forced to 1 instead of 0, producing a
/// two's-complement-extended byte sequence of the same length.
///
/// # Arguments
/// * `src` - The byte range the indices are relative to
/// * `index` - Index of the field's least significant bit
/// * `num_bits` - Field width in bits, at least 1
///
/// # Returns
/// * `Ok(Vec<u8>)` - The sign-extended field
/// * `Err(ExtractError)` - Same failures as [`extract`]
pub fn extract_signed(src: &[u8], index: usize, num_bits: usize) -> Result<Vec<u8>, ExtractError> {
    let mut out = extract(src, index, num_bits)?;
    if flags::is_set(&out, num_bits - 1)? {
        let spanning = (num_bits % 8) as u32;
        if spanning != 0 {
            out[0] |= 0xFF << spanning;
        }
    }
    Ok(out)
}

/// Sign-extending extraction from the `(offset, len)` sub-range of a buffer.
pub fn extract_signed_within(
    src: &[u8],
    offset: usize,
    len: usize,
    index: usize,
    num_bits: usize,
) -> Result<Vec<u8>, ExtractError> {
    let view = window(src, offset, len)?;
    extract_signed(view, index, num_bits)
}
