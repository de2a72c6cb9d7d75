//! PQ-encoded cone response (L'M'S')
//!
//! The intermediate stage between CIE XYZ and JzAzBz. Values stored in
//! [`Lms`] already have the perceptual quantizer curve applied; the raw
//! cone responses only exist transiently inside the conversions.
//!
//! # References
//!
//! Safdar et al., "Perceptually uniform color space for image signals
//! including high dynamic range and wide gamut", Optics Express 25(13), 2017.
//! Combined matrices from <https://observablehq.com/@jrus/jzazbz>.

use super::xyz::Xyz;

/// A color in L'M'S' (cone response with PQ gamma applied).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lms {
    /// Long-wavelength cone response (PQ-encoded)
    pub l: f64,
    /// Medium-wavelength cone response (PQ-encoded)
    pub m: f64,
    /// Short-wavelength cone response (PQ-encoded)
    pub s: f64,
}

impl Lms {
    #[inline]
    pub fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }
}

/// Perceptual quantizer, forward direction (linear light to code value).
///
/// Input is relative XYZ-derived light where `1.0` is diffuse white; it is
/// scaled by `1e-4` so the curve's 10000 cd/m² peak sits far above it.
#[inline]
pub fn pq_encode(x: f64) -> f64 {
    let xp = (x * 1e-4).powf(0.1593017578125);
    ((0.8359375 + 18.8515625 * xp) / (1.0 + 18.6875 * xp)).powf(134.034375)
}

/// Perceptual quantizer, inverse direction (code value to linear light).
///
/// Inputs outside the curve's domain (negative values, or values past
/// the asymptote) produce NaN in the formula; those are returned as `0.0`.
#[inline]
pub fn pq_decode(x: f64) -> f64 {
    let xp = x.powf(7.460772656268214e-3);
    let v = 1e4 * ((0.8359375 - xp) / (18.6875 * xp - 18.8515625)).powf(6.277394636015326);
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

impl From<Xyz> for Lms {
    /// Cone-response matrix followed by the PQ curve per channel.
    fn from(xyz: Xyz) -> Self {
        Self {
            l: pq_encode(0.674207838 * xyz.x + 0.382799340 * xyz.y - 0.047570458 * xyz.z),
            m: pq_encode(0.149284160 * xyz.x + 0.739628340 * xyz.y + 0.083327300 * xyz.z),
            s: pq_encode(0.070941080 * xyz.x + 0.174768000 * xyz.y + 0.670970020 * xyz.z),
        }
    }
}
