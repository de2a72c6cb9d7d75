//! Gradients defined and sampled in JzAzBz
//!
//! A [`Gradient`] is a list of [`GradientStop`]s ordered by offset. Sampling
//! finds the pair of stops around the requested position and blends them in
//! perceptual space, which avoids the muddy midpoints of sRGB interpolation.

mod error;
mod gradient;
mod stop;

pub use error::GradientError;
pub use gradient::{implicit_offsets, Gradient};
pub use stop::GradientStop;
