//! Infrastructure Layer: Field Codec
//!
//! Value-level operations composed on the `entities_bit_fields` core:
//! materializing extracted bit fields as integers (64-bit and arbitrary
//! precision), byte-aligned whole-value decode/encode, and human-readable
//! rendering of byte sequences.
//!
//! Depends on the entities layer.

pub mod decode_value;
pub mod encode_value;
pub mod print_bytes;
pub mod read_field;
pub mod wide_field;

// Re-export main types for convenience
pub use decode_value::DecodeValueError;
pub use read_field::ReadFieldError;
