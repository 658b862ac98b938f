//! Install Code Layout Constants
//!
//! Offsets for the positional dialect are vendor layout assumptions that have
//! never been documented. They are kept exactly as observed in the field and
//! should be treated as unverified.

/// Pattern matched against the whole tagged install code (`G$M:<vendor>$A:<address>$I:<key>`)
///
/// Fields exclude every line terminator (`\n`, `\r`, U+2028, U+2029), not
/// only `\n` as the regex `.` would.
pub const TAGGED_PATTERN: &str = r"^G\$M:[^\r\n\x{2028}\x{2029}]+\$A:([^\r\n\x{2028}\x{2029}]+)\$I:([^\r\n\x{2028}\x{2029}]+)$";

/// Total install code length that carries an 18 byte key
pub const LONG_INSTALL_CODE_LEN: usize = 95;

/// Key length in hex digits for `LONG_INSTALL_CODE_LEN` codes
pub const LONG_KEY_HEX_LEN: usize = 36;

/// Key length in hex digits for every other length
pub const DEFAULT_KEY_HEX_LEN: usize = 32;

/// Distance from the key start back to the first address digit
pub const ADDRESS_START_OFFSET: usize = 19;

/// Distance from the key start back to the end of the address
pub const ADDRESS_END_OFFSET: usize = 3;

/// Device address length in hex digits (8 bytes)
pub const ADDRESS_HEX_LEN: usize = 16;

/// Prefix prepended to rendered device addresses
pub const ADDRESS_PREFIX: &str = "0x";
