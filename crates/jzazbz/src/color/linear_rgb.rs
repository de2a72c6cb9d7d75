//! Linear RGB color type
//!
//! Linear RGB is the color space where channel values are proportional to
//! physical light. It sits between sRGB and CIE XYZ in the pipeline.

use super::gamma::linearize;
use super::srgb::Srgb;
use super::xyz::Xyz;

/// A color in linear RGB color space (sRGB primaries, D65).
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// when converted back from out-of-gamut perceptual colors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel to 16 bits, rounding to nearest.
    ///
    /// Channels outside `0.0..=1.0` saturate; NaN maps to 0.
    #[inline]
    pub fn to_u16(self) -> [u16; 3] {
        [to_u16(self.r), to_u16(self.g), to_u16(self.b)]
    }
}

#[inline]
fn to_u16(v: f64) -> u16 {
    (v * 65535.0).round() as u16
}

impl From<Srgb> for LinearRgb {
    /// Decode the sRGB gamma curve.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: linearize(srgb.r),
            g: linearize(srgb.g),
            b: linearize(srgb.b),
        }
    }
}

impl From<Xyz> for LinearRgb {
    /// CIE XYZ (D65) to linear sRGB.
    fn from(xyz: Xyz) -> Self {
        Self {
            r: 3.2409699419045214 * xyz.x - 1.5373831775700935 * xyz.y
                - 0.49861076029300328 * xyz.z,
            g: -0.96924363628087983 * xyz.x + 1.8759675015077207 * xyz.y
                + 0.041555057407175613 * xyz.z,
            b: 0.055630079696993609 * xyz.x - 0.20397695888897657 * xyz.y
                + 1.0569715142428786 * xyz.z,
        }
    }
}
