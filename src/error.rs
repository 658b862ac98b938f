//! # Install Code Error Handling
//!
//! This module defines the InstallCodeError enum, which represents the different
//! failures that can occur while extracting fields from an install code.

use std::fmt;
use thiserror::Error;

/// Which install-code field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Address,
    Key,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Address => write!(f, "address"),
            Field::Key => write!(f, "key"),
        }
    }
}

/// Represents the different error types that can occur in the install code parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InstallCodeError {
    /// A field contains a character outside `[0-9A-Fa-f]`.
    #[error("Malformed hex in {field} field: invalid character {character:?} at index {index}")]
    MalformedHex {
        field: Field,
        character: char,
        index: usize,
    },

    /// Positional offsets fall outside the input.
    #[error("Install code out of range: {length} characters, positional layout needs at least {required}")]
    OutOfRange { length: usize, required: usize },
}

impl InstallCodeError {
    /// The field the error was raised for, if it concerns a single field.
    pub fn field(&self) -> Option<Field> {
        match self {
            InstallCodeError::MalformedHex { field, .. } => Some(*field),
            InstallCodeError::OutOfRange { .. } => None,
        }
    }
}
