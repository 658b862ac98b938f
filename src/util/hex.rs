//! # Hex Encoding/Decoding Utilities
//!
//! Hex decoding for install-code fields plus the encoding helpers used
//! when printing or logging extracted values.
//!
//! ## Usage
//!
//! ```rust
//! use zb_installcode::error::Field;
//! use zb_installcode::util::hex::{decode_hex_field, encode_hex_upper};
//!
//! let key = decode_hex_field(Field::Key, b"41FE0103").unwrap();
//! assert_eq!(key, vec![0x41, 0xFE, 0x01, 0x03]);
//! assert_eq!(encode_hex_upper(&key), "41FE0103");
//! ```

use crate::error::{Field, InstallCodeError};

/// Decode the hex digits of one install-code field into bytes
///
/// Digit pairs are read left to right, one byte per pair. A trailing single
/// digit becomes a byte of its own, so `ABC` decodes to `[0xAB, 0x0C]`.
/// Both cases are accepted.
pub fn decode_hex_field(field: Field, digits: &[u8]) -> Result<Vec<u8>, InstallCodeError> {
    let (pairs, tail) = digits.split_at(digits.len() - digits.len() % 2);

    let mut bytes = hex::decode(pairs).map_err(|e| {
        let index = match e {
            hex::FromHexError::InvalidHexCharacter { index, .. } => index,
            // even-length input only fails on a character
            _ => 0,
        };
        malformed(field, digits, index)
    })?;

    if let Some(&digit) = tail.first() {
        let nibble = (digit as char)
            .to_digit(16)
            .ok_or_else(|| malformed(field, digits, pairs.len()))?;
        bytes.push(nibble as u8);
    }

    Ok(bytes)
}

fn malformed(field: Field, digits: &[u8], index: usize) -> InstallCodeError {
    InstallCodeError::MalformedHex {
        field,
        character: char_at(digits, index),
        index,
    }
}

/// Recover the character starting at `index`, which may be multi-byte UTF-8
fn char_at(digits: &[u8], index: usize) -> char {
    String::from_utf8_lossy(&digits[index..])
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Encode bytes to lowercase hex string
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Encode bytes to uppercase hex string
///
/// Install codes are printed on device labels in uppercase, so this is the
/// form used for display.
pub fn encode_hex_upper(data: &[u8]) -> String {
    hex::encode_upper(data)
}

/// Format hex data for compact display (useful for logs)
///
/// Formats data as "41 FE 01 03" with spaces between bytes.
pub fn format_hex_compact(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
