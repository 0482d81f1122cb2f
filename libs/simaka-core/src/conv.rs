//! Hex codec
//!
//! Conversion between binary authentication vectors and the hex strings
//! carried in the SIM Manager JSON fields. Decoding validates every digit;
//! malformed input never produces garbage key material.

use thiserror::Error;

/// Hex decoding errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Hex string length does not match the expected vector length
    #[error("invalid hex length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Non-hex character in the input
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },
}

/// Convert bytes to a lowercase hex string
pub fn hex_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Convert bytes to an uppercase hex string (the challenge URL format)
pub fn hex_to_string_upper(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

/// Convert a hex string to exactly `expected_len` bytes.
///
/// Case-insensitive; consumes exactly `2 * expected_len` characters, high
/// nibble first. Fails on any non-hex digit or a length mismatch.
pub fn hex_from_string(hex: &str, expected_len: usize) -> Result<Vec<u8>, DecodeError> {
    if hex.len() != expected_len * 2 {
        return Err(DecodeError::InvalidLength {
            expected: expected_len * 2,
            actual: hex.len(),
        });
    }

    let mut bytes = Vec::with_capacity(expected_len);
    let mut nibbles = hex.bytes().enumerate().map(|(position, digit)| {
        (digit as char)
            .to_digit(16)
            .map(|v| v as u8)
            .ok_or(DecodeError::InvalidDigit {
                digit: digit as char,
                position,
            })
    });
    while let (Some(high), Some(low)) = (nibbles.next(), nibbles.next()) {
        bytes.push((high? << 4) | low?);
    }
    Ok(bytes)
}
