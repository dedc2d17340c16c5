//! Errors returned when decoding values from bytes.
//!
//! Numeric failures such as a singular matrix are not errors, they are reported
//! through `Option` or `bool` return values on the operations themselves.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum DecodeError {
    Io(io::Error),
    /// The buffer does not hold exactly one value
    Length { expected: usize, actual: usize },
    /// The buffer ends in the middle of a value
    Partial { element_size: usize, actual: usize },
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Io(error) => Some(error),
            DecodeError::Length { .. } | DecodeError::Partial { .. } => None,
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::Io(error) => write!(f, "IO error: {error}"),
            DecodeError::Length { expected, actual } => {
                write!(f, "expected {expected} bytes, got {actual}")
            }
            DecodeError::Partial {
                element_size,
                actual,
            } => write!(
                f,
                "{actual} bytes is not a multiple of the element size {element_size}"
            ),
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(error: io::Error) -> Self {
        DecodeError::Io(error)
    }
}
