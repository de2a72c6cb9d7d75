//! CIE XYZ color type (D65)

use super::linear_rgb::LinearRgb;
use super::lms::{pq_decode, Lms};

/// A color in CIE 1931 XYZ, relative to illuminant D65 with white at `Y = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    /// Linear sRGB to CIE XYZ (D65).
    fn from(rgb: LinearRgb) -> Self {
        Self {
            x: 0.41239079926595948 * rgb.r
                + 0.35758433938387796 * rgb.g
                + 0.18048078840183429 * rgb.b,
            y: 0.21263900587151036 * rgb.r
                + 0.71516867876775593 * rgb.g
                + 0.072192315360733715 * rgb.b,
            z: 0.019330818715591851 * rgb.r
                + 0.11919477979462599 * rgb.g
                + 0.95053215224966058 * rgb.b,
        }
    }
}

impl From<Lms> for Xyz {
    /// Undo the PQ curve, then apply the inverse cone-response matrix.
    fn from(lms: Lms) -> Self {
        let l = pq_decode(lms.l);
        let m = pq_decode(lms.m);
        let s = pq_decode(lms.s);
        Self {
            x: 1.661373055774069e+00 * l - 9.145230923250668e-01 * m
                + 2.313620767186147e-01 * s,
            y: -3.250758740427037e-01 * l + 1.571847038366936e+00 * m
                - 2.182538318672940e-01 * s,
            z: -9.098281098284756e-02 * l - 3.127282905230740e-01 * m
                + 1.522766561305260e+00 * s,
        }
    }
}
