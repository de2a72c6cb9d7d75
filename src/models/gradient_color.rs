use jzazbz::Gradient;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;

use super::terminal_color::{DynamicColor, TerminalColor};

/// A dynamic color that transitions between `stops` in JzAzBz.
///
/// `offsets` are optional; when given they must be non-decreasing and one
/// per stop. Invalid stops or offsets produce a black gradient.
///
/// The underlying [`Gradient`] is built on first use and cached. The cache
/// is a [`OnceLock`], so concurrent first callers all see the same build.
#[derive(Debug, Default)]
pub struct GradientColor {
    stops: Vec<String>,
    offsets: Vec<f64>,
    gradient: OnceLock<Gradient>,
}

impl GradientColor {
    pub fn new(stops: Vec<String>, offsets: Vec<f64>) -> Self {
        Self {
            stops,
            offsets,
            gradient: OnceLock::new(),
        }
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// The built gradient, constructing it on first call.
    pub fn gradient(&self) -> &Gradient {
        self.gradient.get_or_init(|| {
            let gradient = Gradient::new(&self.stops, &self.offsets);
            if gradient.is_valid() {
                tracing::debug!(stops = gradient.len(), "Built gradient");
            } else {
                tracing::warn!(
                    stops = self.stops.len(),
                    offsets = self.offsets.len(),
                    "Invalid gradient definition, rendering black"
                );
            }
            gradient
        })
    }
}

impl TerminalColor for GradientColor {
    /// Hex of the first stop.
    fn hex(&self) -> String {
        self.gradient().stop_color(0).hex()
    }

    /// RGBA of the first stop.
    fn rgba(&self) -> [u16; 4] {
        self.gradient().stop_color(0).rgba()
    }
}

impl DynamicColor for GradientColor {
    /// Horizontal gradient: only `x` and `x_max` select the color.
    fn hex_at(&self, x: usize, _y: usize, x_max: usize, _y_max: usize) -> String {
        self.gradient().color_at(x, x_max).hex()
    }
}

impl Clone for GradientColor {
    /// Clones the definition; the copy rebuilds its gradient lazily.
    fn clone(&self) -> Self {
        Self::new(self.stops.clone(), self.offsets.clone())
    }
}

impl PartialEq for GradientColor {
    fn eq(&self, other: &Self) -> bool {
        self.stops == other.stops && self.offsets == other.offsets
    }
}

#[derive(Deserialize)]
struct GradientColorDef {
    stops: Vec<String>,
    #[serde(default)]
    offsets: Vec<f64>,
}

impl<'de> Deserialize<'de> for GradientColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let def = GradientColorDef::deserialize(deserializer)?;
        Ok(Self::new(def.stops, def.offsets))
    }
}
