//! JzAzBz perceptual color space
//!
//! JzAzBz is perceptually uniform over a wide gamut and linear in iso-hue
//! directions, so straight-line interpolation between two colors reads as a
//! smooth transition. It is always computed relative to illuminant D65.
//!
//! | Component | Description | Range     |
//! |-----------|-------------|-----------|
//! | `j`       | lightness   | `[0, 1]`  |
//! | `a`       | green-red   | `[-1, 1]` |
//! | `b`       | blue-yellow | `[-1, 1]` |

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::linear_rgb::LinearRgb;
use super::lms::Lms;
use super::srgb::Srgb;
use super::xyz::Xyz;

/// Offset that makes `j` land on zero for black.
const D0: f64 = 1.6295499532821566e-11;

/// A color in the JzAzBz color space.
///
/// Immutable: every conversion and blend yields a new value. Components are
/// not clamped, so out-of-gamut inputs carry through unchanged.
///
/// # Example
///
/// ```
/// use jzazbz::Color;
///
/// let red = Color::from_hex("#ff0000");
/// let blue = Color::from_hex("#0000ff");
/// let mid = red.blend(&blue, 0.5);
/// assert_eq!(red.hex(), "#ff0000");
/// assert!(mid.j() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    j: f64,
    a: f64,
    b: f64,
}

impl Color {
    /// Black, the neutral value every lenient operation degrades to.
    pub const BLACK: Color = Color {
        j: 0.0,
        a: 0.0,
        b: 0.0,
    };

    #[inline]
    pub const fn new(j: f64, a: f64, b: f64) -> Self {
        Self { j, a, b }
    }

    /// Lightness.
    #[inline]
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Green-red axis.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Blue-yellow axis.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Convert a hex color string, degrading to black on any parse error.
    ///
    /// Accepts the same forms as [`Srgb`]'s `FromStr`: `#RRGGBB`, `#RGB`,
    /// with or without the leading `#`. Use `str::parse::<Color>()` to see
    /// the error instead.
    ///
    /// ```
    /// use jzazbz::Color;
    /// assert_eq!(Color::from_hex("not a color"), Color::BLACK);
    /// ```
    pub fn from_hex(s: &str) -> Self {
        s.parse().unwrap_or(Self::BLACK)
    }

    /// Gamma-encoded `#rrggbb` string.
    ///
    /// Channels are scaled to 255, rounded to nearest and saturated.
    pub fn hex(&self) -> String {
        Srgb::from(*self).to_hex()
    }

    /// 16-bit `[r, g, b, a]` channels, alpha always `0xFFFF`.
    ///
    /// Unlike [`Color::hex`], the color channels are LINEAR light, not
    /// gamma-encoded. Consumers that compare this against `hex()` output
    /// will see darker mid-tones; that asymmetry is relied upon downstream
    /// and must not be "fixed" here.
    pub fn rgba(&self) -> [u16; 4] {
        let [r, g, b] = LinearRgb::from(*self).to_u16();
        [r, g, b, u16::MAX]
    }

    /// Linear interpolation towards `other` in JzAzBz.
    ///
    /// Components that are equal in both colors are copied verbatim, so
    /// blending a color with itself returns it exactly for any `frac`,
    /// including NaN.
    pub fn blend(&self, other: &Color, frac: f64) -> Color {
        Color {
            j: lerp(self.j, other.j, frac),
            a: lerp(self.a, other.a, frac),
            b: lerp(self.b, other.b, frac),
        }
    }
}

#[inline]
fn lerp(a: f64, b: f64, f: f64) -> f64 {
    if a == b {
        return a;
    }
    a * (1.0 - f) + b * f
}

impl From<Lms> for Color {
    fn from(lms: Lms) -> Self {
        let iz = 0.5 * (lms.l + lms.m);
        Self {
            j: (0.44 * iz) / (1.0 - 0.56 * iz) - D0,
            a: 3.524000 * lms.l - 4.066708 * lms.m + 0.542708 * lms.s,
            b: 0.199076 * lms.l + 1.096799 * lms.m - 1.295875 * lms.s,
        }
    }
}

impl From<Color> for Lms {
    fn from(c: Color) -> Self {
        let jz = c.j + D0;
        let iz = jz / (0.44 + 0.56 * jz);
        Self {
            l: iz + 1.386050432715393e-1 * c.a + 5.804731615611869e-2 * c.b,
            m: iz - 1.386050432715393e-1 * c.a - 5.804731615611891e-2 * c.b,
            s: iz - 9.601924202631895e-2 * c.a - 8.118918960560390e-1 * c.b,
        }
    }
}

impl From<Xyz> for Color {
    #[inline]
    fn from(xyz: Xyz) -> Self {
        Lms::from(xyz).into()
    }
}

impl From<LinearRgb> for Color {
    #[inline]
    fn from(rgb: LinearRgb) -> Self {
        Xyz::from(rgb).into()
    }
}

impl From<Srgb> for Color {
    #[inline]
    fn from(srgb: Srgb) -> Self {
        LinearRgb::from(srgb).into()
    }
}

impl From<Color> for Xyz {
    #[inline]
    fn from(c: Color) -> Self {
        Lms::from(c).into()
    }
}

impl From<Color> for LinearRgb {
    #[inline]
    fn from(c: Color) -> Self {
        Xyz::from(c).into()
    }
}

impl From<Color> for Srgb {
    #[inline]
    fn from(c: Color) -> Self {
        LinearRgb::from(c).into()
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Srgb>().map(Color::from)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
