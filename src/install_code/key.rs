//! Pre-shared key extracted from an install code.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Field, InstallCodeError};
use crate::util::hex::decode_hex_field;

/// Key bytes decoded from the install code, one byte per hex digit pair
/// (a trailing unpaired digit becomes a byte of its own)
///
/// Usually 16 bytes, or 18 when the install code carries its trailing
/// CRC in the key field. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct InstallCodeKey {
    bytes: Vec<u8>,
}

impl InstallCodeKey {
    /// Decode the raw key field digits
    pub fn from_hex_digits(digits: &[u8]) -> Result<Self, InstallCodeError> {
        let bytes = decode_hex_field(Field::Key, digits)?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for InstallCodeKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// Key material stays out of debug output and logs.
impl fmt::Debug for InstallCodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstallCodeKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
