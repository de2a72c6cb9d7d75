//! Error type for hex color parsing.

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned by the strict [`FromStr`](std::str::FromStr) impls. The lenient
/// [`Color::from_hex`](crate::Color::from_hex) swallows it and yields black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after stripping '#' is neither 3 nor 6
    InvalidLength(usize),
    /// Character that is not a hexadecimal digit
    InvalidHex(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(f, "invalid hex color length {len} (expected 3 or 6 digits)")
            }
            ParseColorError::InvalidHex(c) => {
                write!(f, "invalid hex character: {c:?}")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
