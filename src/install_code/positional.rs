//! Positional install codes
//!
//! Field boundaries are counted back from the end of the string. The key
//! occupies the tail; its length depends on the total code length through
//! [`KeyLengthPolicy`]. The address sits between `ADDRESS_START_OFFSET` and
//! `ADDRESS_END_OFFSET` characters before the key start.
//!
//! ```text
//! ZB10SG0D83101823480040000000000000000000 F4CE36D88AB8B6FD DLK 00112233445566778899AABBCCDDEEFF528F
//!                                          |<-- address -->|     |<------------ key ------------->|
//! ```

use super::RawFields;
use crate::constants::{
    ADDRESS_END_OFFSET, ADDRESS_START_OFFSET, DEFAULT_KEY_HEX_LEN, LONG_INSTALL_CODE_LEN,
    LONG_KEY_HEX_LEN,
};
use crate::error::InstallCodeError;

/// Table mapping total install code length to key length in hex digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLengthPolicy {
    rules: Vec<(usize, usize)>,
    default_key_len: usize,
}

impl KeyLengthPolicy {
    /// Policy with no length-specific rules
    pub fn new(default_key_len: usize) -> Self {
        Self {
            rules: Vec::new(),
            default_key_len,
        }
    }

    /// Add a rule: codes of `code_len` characters carry a `key_len` digit key
    ///
    /// A later rule for the same code length replaces the earlier one.
    pub fn with_rule(mut self, code_len: usize, key_len: usize) -> Self {
        self.rules.retain(|(len, _)| *len != code_len);
        self.rules.push((code_len, key_len));
        self
    }

    /// Key length in hex digits for a code of `code_len` characters
    pub fn key_len(&self, code_len: usize) -> usize {
        self.rules
            .iter()
            .find(|(len, _)| *len == code_len)
            .map(|(_, key_len)| *key_len)
            .unwrap_or(self.default_key_len)
    }

    /// Smallest code length whose offsets stay in range for this policy
    pub fn min_code_len(&self, code_len: usize) -> usize {
        self.key_len(code_len) + ADDRESS_START_OFFSET
    }
}

impl Default for KeyLengthPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_HEX_LEN).with_rule(LONG_INSTALL_CODE_LEN, LONG_KEY_HEX_LEN)
    }
}

/// Slice the address and key fields out of a positional install code
///
/// Lengths are counted in bytes; for ASCII codes this equals characters.
pub fn extract<'a>(
    input: &'a str,
    policy: &KeyLengthPolicy,
) -> Result<RawFields<'a>, InstallCodeError> {
    let bytes = input.as_bytes();
    let length = bytes.len();
    let key_len = policy.key_len(length);

    let key_start = length
        .checked_sub(key_len)
        .and_then(|start| start.checked_sub(ADDRESS_START_OFFSET).map(|_| start))
        .ok_or(InstallCodeError::OutOfRange {
            length,
            required: policy.min_code_len(length),
        })?;

    Ok(RawFields {
        address: &bytes[key_start - ADDRESS_START_OFFSET..key_start - ADDRESS_END_OFFSET],
        key: &bytes[key_start..],
    })
}
