//! # zb-installcode - Zigbee Install Code Parsing
//!
//! The zb-installcode crate extracts the device address and pre-shared key
//! from the install code printed on a Zigbee device, as used when the device
//! is joined to a network with install-code based security.
//!
//! ## Features
//!
//! - Tagged install codes (`G$M:<vendor>$A:<address>$I:<key>`)
//! - Positional install codes, where fields sit at fixed offsets from the end
//! - Typed errors for malformed hex and codes too short for their layout
//! - Key buffers wiped on drop
//!
//! The crate does no cryptography: it neither derives link keys nor checks
//! the CRC carried in the key field.
//!
//! ## Usage
//!
//! ```rust
//! use zb_installcode::{parse_install_code, InstallCodeError};
//!
//! let parsed = parse_install_code(
//!     "ZB10SG0D83101823480040000000000000000000F4CE36D88AB8B6FDDLK00112233445566778899AABBCCDDEEFF528F",
//! )?;
//! assert_eq!(parsed.device_address.as_str(), "0xF4CE36D88AB8B6FD");
//! assert_eq!(parsed.key.len(), 18);
//! # Ok::<(), InstallCodeError>(())
//! ```

pub mod constants;
pub mod error;
pub mod install_code;
pub mod logging;
pub mod util;

pub use crate::error::{Field, InstallCodeError};
pub use crate::logging::{init_logger, log_info};

pub use install_code::{
    parse_install_code, DeviceAddress, InstallCodeFormat, InstallCodeKey, InstallCodeParser,
    KeyLengthPolicy, ParsedInstallCode,
};
