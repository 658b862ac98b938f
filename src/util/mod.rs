//! # Utility Modules
//!
//! Hex helpers shared by the parser and the CLI.

pub mod hex;

pub use self::hex::{decode_hex_field, encode_hex, encode_hex_upper, format_hex_compact};
