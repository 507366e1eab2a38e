//! Builder error types.

use std::error::Error;
use std::fmt;

use crate::format::ArgKind;

/// Errors returned by [`StringBuilder`](crate::StringBuilder) writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextError {
    /// The write would reach the reserved last byte. Nothing was written.
    CapacityExceeded {
        /// Bytes the write needed.
        requested: usize,
        /// Bytes that could still be written.
        available: usize,
    },
    /// A conversion had no argument left to consume.
    MissingArgument {
        /// The conversion byte (`d`, `u`, ...).
        specifier: u8,
        /// Position the argument would have had in the list.
        index: usize,
    },
    /// The argument cannot be rendered by its conversion.
    ArgumentMismatch {
        /// The conversion byte.
        specifier: u8,
        /// Position of the offending argument.
        index: usize,
        /// What was supplied instead.
        found: ArgKind,
    },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                available,
            } => {
                write!(
                    f,
                    "capacity exceeded: {requested} bytes requested, {available} available"
                )
            }
            Self::MissingArgument { specifier, index } => {
                write!(
                    f,
                    "missing argument {index} for conversion '%{}'",
                    char::from(*specifier)
                )
            }
            Self::ArgumentMismatch {
                specifier,
                index,
                found,
            } => {
                write!(
                    f,
                    "argument {index} ({found}) does not fit conversion '%{}'",
                    char::from(*specifier)
                )
            }
        }
    }
}

impl Error for TextError {}
