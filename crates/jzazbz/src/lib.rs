#![allow(clippy::excessive_precision, clippy::module_inception)]

//! jzazbz: perceptually smooth color gradients
//!
//! This library converts between sRGB and the JzAzBz perceptually uniform
//! color space, and samples multi-stop gradients in JzAzBz.
//!
//! # Quick Start
//!
//! ```
//! use jzazbz::{Color, Gradient};
//!
//! let gradient = Gradient::new(&["#ff5f6d", "#ffc371", "#47b8e0"], &[]);
//!
//! for x in 0..=4 {
//!     let hex = gradient.color_at(x, 4).hex();
//!     assert_eq!(hex.len(), 7);
//! }
//!
//! let teal = Color::from_hex("#008080");
//! assert_eq!(teal.hex(), "#008080");
//! ```
//!
//! # Color Spaces
//!
//! Each pipeline stage is its own type, so a channel can never be fed to
//! the wrong formula:
//!
//! - [`Srgb`]: gamma-encoded display values, the form hex strings use
//! - [`LinearRgb`]: linear light, proportional to photon count
//! - [`Xyz`]: CIE XYZ relative to D65
//! - [`Lms`]: cone response with the perceptual quantizer applied
//! - [`Color`]: JzAzBz, where gradients are blended
//!
//! ## Why JzAzBz
//!
//! Interpolating in sRGB or linear RGB produces uneven gradients: a
//! red-to-blue ramp passes through a dark, desaturated purple, and steps
//! that are numerically equal look very different in size. JzAzBz
//! (Safdar et al., 2017) is built so that equal distances read as equal
//! perceived differences and hue stays stable along straight lines, so a
//! per-component lerp between two stops looks smooth.
//!
//! ## Pipeline
//!
//! ```text
//! "#rrggbb"
//!     |  parse (each channel / 255, or / 15 for #rgb)
//!     v
//! Srgb
//!     |  gamma decode (IEC 61966-2-1)
//!     v
//! LinearRgb  ------------------------------>  rgba()  (16-bit, linear)
//!     |  3x3 matrix (sRGB primaries, D65)
//!     v
//! Xyz
//!     |  3x3 cone matrix + PQ curve per channel
//!     v
//! Lms
//!     |  Iz = (L'+M')/2, opponent axes a and b
//!     v
//! Color (Jz, az, bz)  <-- blend() happens here
//! ```
//!
//! The way back runs the exact inverses in reverse order, ending in
//! `hex()`, which gamma-encodes before scaling to 8 bits.
//!
//! ## Error Handling
//!
//! Nothing in the numeric path fails. Malformed input degrades to a fixed
//! neutral value instead:
//!
//! - a malformed hex string converts to [`Color::BLACK`]
//!   ([`Color::from_hex`]); `str::parse` reports a [`ParseColorError`]
//! - an invalid gradient definition yields the zero-stop gradient
//!   ([`Gradient::new`]) whose every query returns black;
//!   [`Gradient::try_new`] reports a [`GradientError`]
//! - where the inverse PQ curve has no real value it contributes `0`
//!
//! ## Concurrency
//!
//! Every type here is a plain immutable value and `Send + Sync`. A built
//! [`Gradient`] can be shared between threads and queried without locking.

pub mod color;
pub mod gradient;

#[cfg(test)]
mod domain_tests;

pub use color::{
    pq_decode, pq_encode, Color, LinearRgb, Lms, ParseColorError, Srgb, Xyz,
};
pub use gradient::{implicit_offsets, Gradient, GradientError, GradientStop};
