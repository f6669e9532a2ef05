//! Print Bytes Module
//!
//! Human-readable rendering of byte sequences: binary, hexadecimal, and
//! unsigned decimal forms, plus line-printing wrappers over stdout.

/// Render each byte as 8 binary digits, space-separated.
///
/// # Arguments
/// * `bytes` - The byte array
///
/// # Returns
/// A string like `"10000000 00001111"`; empty input renders `""`
pub fn binary_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render each byte as 2 uppercase hexadecimal digits, space-separated.
///
/// # Arguments
/// * `bytes` - The byte array
///
/// # Returns
/// A string like `"80 0F"`; empty input renders `""`
pub fn hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render each byte as its unsigned 0..=255 decimal value, space-separated.
///
/// # Arguments
/// * `bytes` - The byte array
///
/// # Returns
/// A string like `"128 15"`; empty input renders `""`
pub fn unsigned_decimal_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the binary form of a byte array to stdout, followed by a newline.
pub fn print_binary(bytes: &[u8]) {
    println!("{}", binary_string(bytes));
}

/// Print the hexadecimal form of a byte array to stdout, followed by a
/// newline.
pub fn print_hex(bytes: &[u8]) {
    println!("{}", hex_string(bytes));
}

/// Print the unsigned decimal form of a byte array to stdout, followed by a
/// newline.
pub fn print_unsigned_decimal(bytes: &[u8]) {
    println!("{}", unsigned_decimal_string(bytes));
}
