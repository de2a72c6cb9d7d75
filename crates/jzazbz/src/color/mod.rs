//! Color types and conversion utilities
//!
//! One type per stage of the pipeline, with `From` conversions between
//! neighbours in both directions:
//!
//! ```text
//! Srgb <-> LinearRgb <-> Xyz <-> Lms <-> Color (JzAzBz)
//! ```
//!
//! Conversions further apart compose through the stages in between, so
//! `Color::from(srgb)` and `Srgb::from(color)` work directly.
//!
//! # Example
//!
//! ```
//! use jzazbz::{Color, LinearRgb, Srgb};
//!
//! let srgb: Srgb = "#3a7bd5".parse().unwrap();
//! let color = Color::from(srgb);
//!
//! let linear = LinearRgb::from(color);
//! assert!(linear.b > linear.r);
//! assert_eq!(Srgb::from(color).to_hex(), "#3a7bd5");
//! ```

mod error;
pub mod gamma;
mod jzazbz;
mod linear_rgb;
mod lms;
mod srgb;
mod xyz;

pub use error::ParseColorError;
pub use jzazbz::Color;
pub use linear_rgb::LinearRgb;
pub use lms::{pq_decode, pq_encode, Lms};
pub use srgb::Srgb;
pub use xyz::Xyz;
