//! sRGB color type
//!
//! sRGB is the gamma-encoded color space used by hex color strings and
//! displays. It is the entry and exit point of the JzAzBz pipeline.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::gamma::delinearize;
use super::linear_rgb::LinearRgb;

/// A color in sRGB color space.
///
/// Channels are gamma-encoded and nominally in `0.0..=1.0`. Values coming
/// back from the perceptual space are not clamped; [`Srgb::to_bytes`]
/// saturates them when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Srgb {
    /// Red channel (gamma-encoded)
    pub r: f64,
    /// Green channel (gamma-encoded)
    pub g: f64,
    /// Blue channel (gamma-encoded)
    pub b: f64,
}

impl Srgb {
    /// Create a new Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use jzazbz::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Convert to `[R, G, B]` bytes.
    ///
    /// Each channel is scaled to 255, rounded to nearest and saturated into
    /// `0..=255`. NaN maps to 0.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Format as a lowercase `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use jzazbz::Srgb;
    /// assert_eq!(Srgb::from_u8(255, 128, 0).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

#[inline]
fn to_byte(v: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    (v * 255.0).round() as u8
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode linear light for display.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: delinearize(linear.r),
            g: delinearize(linear.g),
            b: delinearize(linear.b),
        }
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse an sRGB color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - each pair divided by 255
    /// - `#RGB` / `RGB` - each digit divided by 15
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use jzazbz::Srgb;
    ///
    /// let white: Srgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Srgb = "f00".parse().unwrap();
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.g, 0.0);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidHex(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits[..] {
            [r, g, b] => Ok(Self::new(
                f64::from(r) / 15.0,
                f64::from(g) / 15.0,
                f64::from(b) / 15.0,
            )),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::from_u8(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(ParseColorError::InvalidLength(digits.len())),
        }
    }
}
