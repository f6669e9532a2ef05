//! Entities Layer: Bit Fields
//!
//! This crate provides the bit-level core of the bit-field codec. It implements
//! the bit addressing convention shared by every operation in the system,
//! single-bit flag operations, the cross-byte-boundary range extraction engine
//! with its sign extension layer, and a cursor-bearing byte buffer.
//!
//! ## Overview
//!
//! Binary protocols and file formats frequently pack fields that are not
//! aligned to byte boundaries: 3-bit flags, 12-bit counters spanning byte
//! edges. The `entities_bit_fields` crate is the foundation for reading and
//! mutating such fields: it treats a byte range as one long bitstring and
//! provides the primitives to test, set, clear, and extract arbitrary
//! contiguous bit ranges.
//!
//! ## Bit Numbering
//!
//! Every operation in this crate uses the same **right-to-left, byte-reversed
//! numbering**, relative to the byte range in use:
//!
//! - Bit 0 is the least significant bit of the *last* byte of the range.
//! - Bit `len*8 - 1` is the most significant bit of the *first* byte.
//!
//! This is the numbering a big-endian wire value naturally carries: bit `i`
//! has weight `2^i` when the whole range is read as one big-endian integer.
//! The mapping from a bit index to a byte and a position within that byte is
//! centralized in [`addressing::locate`]; no operation recomputes it.
//!
//! ## Modules
//!
//! - **[`addressing`]**: the bit addressing convention - bit index to
//!   (byte, bit-in-byte) mapping, field width helpers, sub-range windows.
//! - **[`flags`]**: test, set, and clear a single addressed bit in place.
//! - **[`extract`]**: extract an arbitrary bit range into a freshly allocated,
//!   left-padded byte sequence, with optional two's-complement sign extension.
//! - **[`cursor`]**: an owned byte buffer carrying a read position that
//!   supplies the sub-range offset for position-based operations.
//!
//! ## Usage
//!
//! ```rust
//! use entities_bit_fields::{extract, flags};
//!
//! // 0xAB 0xCD as a 16-bit string: bit 0 is the lowest bit of 0xCD.
//! let buf = [0xABu8, 0xCD];
//! assert!(flags::is_set(&buf, 0).unwrap());
//!
//! // Eight bits starting at bit 4 straddle both bytes.
//! let field = extract::extract(&buf, 4, 8).unwrap();
//! assert_eq!(field, vec![0xBC]);
//! ```
//!
//! ## Architecture
//!
//! This crate is the innermost layer of the workspace and has no dependencies.
//! The infrastructure layer ([`infrastructure_field_codec`]) composes value
//! materialization and rendering on top of it.
//!
//! [`infrastructure_field_codec`]: ../infrastructure_field_codec/index.html

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

pub mod addressing;
pub mod cursor;
pub mod extract;
pub mod flags;

// Re-export main types for convenience
pub use addressing::{BitAddressError, BitLocation};
pub use cursor::{ByteCursor, CursorError};
pub use extract::ExtractError;
