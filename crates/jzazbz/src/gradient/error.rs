//! Error type for gradient construction.

use std::fmt;

/// Error type for gradient validation.
///
/// Returned by [`Gradient::try_new`](crate::Gradient::try_new). The lenient
/// [`Gradient::new`](crate::Gradient::new) maps every variant to the
/// invalid (zero-stop) gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientError {
    /// No stops provided
    NoStops,
    /// Explicit offsets given, but not one per stop
    OffsetCountMismatch {
        /// Number of color stops
        stops: usize,
        /// Number of offsets
        offsets: usize,
    },
    /// Offsets decrease (or are NaN) at the specified index
    UnsortedOffsets {
        /// First index whose offset is not `>=` its predecessor
        index: usize,
    },
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::NoStops => {
                write!(f, "gradient needs at least one stop")
            }
            GradientError::OffsetCountMismatch { stops, offsets } => {
                write!(
                    f,
                    "offset count mismatch: {} stops but {} offsets",
                    stops, offsets
                )
            }
            GradientError::UnsortedOffsets { index } => {
                write!(f, "offsets must be non-decreasing (violated at index {})", index)
            }
        }
    }
}

impl std::error::Error for GradientError {}
