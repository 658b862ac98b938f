//! # Install Code Parsing
//!
//! Extracts the device address and pre-shared key from the install code a
//! Zigbee device ships with. Two dialects are understood:
//!
//! - **Tagged**: `G$M:<vendor>$A:<address>$I:<key>` with `$`-delimited labels
//! - **Positional**: fields located at fixed offsets from the end of the code
//!
//! Classification happens once, up front. The tagged pattern wins when it
//! matches the whole string; everything else is treated as positional, and
//! positional failures are never retried as tagged.
//!
//! ```rust
//! use zb_installcode::install_code::{parse_install_code, InstallCodeFormat};
//!
//! let parsed = parse_install_code("G$M:1234$A:00124B0009D69F77$I:41FE01030405060708090A0B0C0D0E0F").unwrap();
//! assert_eq!(parsed.format, InstallCodeFormat::Tagged);
//! assert_eq!(parsed.device_address.as_str(), "0x00124B0009D69F77");
//! assert_eq!(parsed.key.len(), 16);
//! ```

pub mod address;
pub mod key;
pub mod positional;
pub mod tagged;

use std::fmt;
use std::str::FromStr;

use crate::error::InstallCodeError;

pub use address::DeviceAddress;
pub use key::InstallCodeKey;
pub use positional::KeyLengthPolicy;

/// Address and key digits as they appear in the install code, undecoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFields<'a> {
    pub address: &'a [u8],
    pub key: &'a [u8],
}

/// Install code dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstallCodeFormat {
    Tagged,
    Positional,
}

impl InstallCodeFormat {
    /// Decide which dialect an install code is written in
    pub fn classify(input: &str) -> Self {
        if tagged::matches(input) {
            InstallCodeFormat::Tagged
        } else {
            InstallCodeFormat::Positional
        }
    }
}

impl fmt::Display for InstallCodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallCodeFormat::Tagged => write!(f, "tagged"),
            InstallCodeFormat::Positional => write!(f, "positional"),
        }
    }
}

/// Result of parsing an install code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstallCode {
    /// Dialect the code was parsed as
    pub format: InstallCodeFormat,
    /// `0x` followed by the address digits (16 for well-formed codes)
    pub device_address: DeviceAddress,
    /// Decoded key bytes
    pub key: InstallCodeKey,
}

/// Parser holding the key length policy for positional codes
#[derive(Debug, Clone, Default)]
pub struct InstallCodeParser {
    policy: KeyLengthPolicy,
}

impl InstallCodeParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser using a custom positional key length table
    pub fn with_policy(policy: KeyLengthPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &KeyLengthPolicy {
        &self.policy
    }

    /// Parse an install code into its device address and key
    ///
    /// The key is decoded before the address, so a code with both fields
    /// broken reports the key.
    pub fn parse(&self, install_code: &str) -> Result<ParsedInstallCode, InstallCodeError> {
        let (format, fields) = match tagged::extract(install_code) {
            Some(fields) => (InstallCodeFormat::Tagged, fields),
            None => (
                InstallCodeFormat::Positional,
                positional::extract(install_code, &self.policy)?,
            ),
        };

        log::debug!(
            target: "zb_installcode::parser",
            "{} install code: {} chars, address field {} digits, key field {} digits",
            format,
            install_code.len(),
            fields.address.len(),
            fields.key.len()
        );

        let key = InstallCodeKey::from_hex_digits(fields.key)?;
        let device_address = DeviceAddress::from_hex_digits(fields.address)?;

        Ok(ParsedInstallCode {
            format,
            device_address,
            key,
        })
    }
}

/// Parse an install code with the default key length policy
pub fn parse_install_code(install_code: &str) -> Result<ParsedInstallCode, InstallCodeError> {
    InstallCodeParser::new().parse(install_code)
}

impl FromStr for ParsedInstallCode {
    type Err = InstallCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_install_code(s)
    }
}
