//! Device address extracted from an install code.

use std::fmt;

use crate::constants::{ADDRESS_HEX_LEN, ADDRESS_PREFIX};
use crate::error::{Field, InstallCodeError};
use crate::util::hex::decode_hex_field;

/// Device address rendered as `0x` followed by the address digits
///
/// Digits are kept verbatim, case included. Well-formed codes carry 16
/// digits (a 64-bit address); tagged codes may carry other lengths, for
/// which the typed accessors return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceAddress {
    text: String,
}

impl DeviceAddress {
    /// Build an address from the raw field digits (without `0x`)
    pub fn from_hex_digits(digits: &[u8]) -> Result<Self, InstallCodeError> {
        decode_hex_field(Field::Address, digits)?;

        // decode_hex_field guarantees ASCII
        let text = format!("{ADDRESS_PREFIX}{}", String::from_utf8_lossy(digits));

        Ok(Self { text })
    }

    /// Rendered form, e.g. `0x00124B0009D69F77`
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Digits after the `0x` prefix
    pub fn digits(&self) -> &str {
        &self.text[ADDRESS_PREFIX.len()..]
    }

    /// Whether the address has the standard 16 digits
    pub fn is_extended(&self) -> bool {
        self.digits().len() == ADDRESS_HEX_LEN
    }

    /// Address bytes, most significant first, for 16 digit addresses
    pub fn to_bytes(&self) -> Option<[u8; 8]> {
        if !self.is_extended() {
            return None;
        }
        let mut bytes = [0u8; 8];
        hex::decode_to_slice(self.digits(), &mut bytes).ok()?;
        Some(bytes)
    }

    /// Address as a 64-bit integer, for 16 digit addresses
    pub fn to_u64(&self) -> Option<u64> {
        self.to_bytes().map(u64::from_be_bytes)
    }
}

impl fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for DeviceAddress {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_case() {
        let addr = DeviceAddress::from_hex_digits(b"00124b0009D69F77").unwrap();
        assert_eq!(addr.as_str(), "0x00124b0009D69F77");
        assert_eq!(addr.to_string().len(), 18);
        assert!(addr.is_extended());
    }

    #[test]
    fn test_bytes_and_integer() {
        let addr = DeviceAddress::from_hex_digits(b"F4CE36D88AB8B6FD").unwrap();
        assert_eq!(
            addr.to_bytes(),
            Some([0xF4, 0xCE, 0x36, 0xD8, 0x8A, 0xB8, 0xB6, 0xFD])
        );
        assert_eq!(addr.to_u64(), Some(0xF4CE_36D8_8AB8_B6FD));
    }

    #[test]
    fn test_short_address_verbatim() {
        let addr = DeviceAddress::from_hex_digits(b"ABCD").unwrap();
        assert_eq!(addr.as_str(), "0xABCD");
        assert_eq!(addr.digits(), "ABCD");
        assert!(!addr.is_extended());
        assert_eq!(addr.to_bytes(), None);
        assert_eq!(addr.to_u64(), None);
    }

    #[test]
    fn test_odd_address_verbatim() {
        let addr = DeviceAddress::from_hex_digits(b"ABC").unwrap();
        assert_eq!(addr.as_str(), "0xABC");
    }

    #[test]
    fn test_malformed() {
        let err = DeviceAddress::from_hex_digits(b"00124B0009D69FXX").unwrap_err();
        assert_eq!(err.field(), Some(Field::Address));
        assert!(matches!(err, InstallCodeError::MalformedHex { index: 14, .. }));
    }
}
