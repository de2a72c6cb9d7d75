//! Multi-stop gradient sampled in JzAzBz.

use std::borrow::Cow;

use super::error::GradientError;
use super::stop::GradientStop;
use crate::color::Color;

/// An ordered sequence of color stops with non-decreasing offsets.
///
/// Gradients are immutable once built. A gradient with zero stops is the
/// *invalid* gradient: [`Gradient::new`] returns it when validation fails,
/// and every query on it yields [`Color::BLACK`].
///
/// # Example
///
/// ```
/// use jzazbz::{Color, Gradient};
///
/// let gradient = Gradient::try_new(&["#ff0000", "#0000ff"], &[]).unwrap();
///
/// // Endpoints are returned exactly
/// assert_eq!(gradient.color_at(0, 10), Color::from_hex("#ff0000"));
/// assert_eq!(gradient.color_at(10, 10), Color::from_hex("#0000ff"));
///
/// // Everything in between is blended in perceptual space
/// let mid = gradient.color_at(5, 10);
/// assert_ne!(mid, Color::BLACK);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Build a gradient from hex color strings and optional offsets.
    ///
    /// Stop strings are converted with [`Color::from_hex`], so a malformed
    /// color becomes a black stop rather than an error. When `offsets` is
    /// empty they are synthesized by [`implicit_offsets`].
    ///
    /// # Errors
    ///
    /// - [`GradientError::NoStops`] if `stops` is empty
    /// - [`GradientError::OffsetCountMismatch`] if `offsets` is non-empty
    ///   and its length differs from `stops`
    /// - [`GradientError::UnsortedOffsets`] if `offsets` ever decreases
    pub fn try_new<S: AsRef<str>>(stops: &[S], offsets: &[f64]) -> Result<Self, GradientError> {
        if stops.is_empty() {
            return Err(GradientError::NoStops);
        }

        let offsets: Cow<'_, [f64]> = if offsets.is_empty() {
            Cow::Owned(implicit_offsets(stops.len()))
        } else {
            if offsets.len() != stops.len() {
                return Err(GradientError::OffsetCountMismatch {
                    stops: stops.len(),
                    offsets: offsets.len(),
                });
            }
            check_sorted(offsets.iter().copied())?;
            Cow::Borrowed(offsets)
        };

        let stops = stops
            .iter()
            .zip(offsets.iter())
            .map(|(hex, &offset)| GradientStop::new(Color::from_hex(hex.as_ref()), offset))
            .collect();

        Ok(Self { stops })
    }

    /// Like [`Gradient::try_new`], but returns the invalid gradient on error.
    pub fn new<S: AsRef<str>>(stops: &[S], offsets: &[f64]) -> Self {
        match Self::try_new(stops, offsets) {
            Ok(gradient) => gradient,
            Err(e) => {
                tracing::debug!(error = %e, "Rejected gradient, falling back to invalid gradient");
                Self::invalid()
            }
        }
    }

    /// Build a gradient from stops that already carry colors.
    ///
    /// # Errors
    ///
    /// [`GradientError::NoStops`] or [`GradientError::UnsortedOffsets`].
    pub fn from_stops(stops: Vec<GradientStop>) -> Result<Self, GradientError> {
        if stops.is_empty() {
            return Err(GradientError::NoStops);
        }
        check_sorted(stops.iter().map(GradientStop::offset))?;
        Ok(Self { stops })
    }

    /// The zero-stop gradient.
    pub fn invalid() -> Self {
        Self { stops: Vec::new() }
    }

    /// Whether this gradient has at least one stop.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.stops.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color of the stop at `index`, or black when out of range.
    pub fn stop_color(&self, index: usize) -> Color {
        self.stops
            .get(index)
            .map_or(Color::BLACK, GradientStop::color)
    }

    /// Sample the gradient at `position` out of `max`.
    ///
    /// `position == 0` and `position == max` return the first and last
    /// stop colors exactly, bypassing interpolation.
    pub fn color_at(&self, position: usize, max: usize) -> Color {
        match self.stops.as_slice() {
            [] => return Color::BLACK,
            [only] => return only.color(),
            _ => {}
        }

        if position == 0 {
            return self.stops[0].color();
        }
        if position == max {
            return self.stops[self.stops.len() - 1].color();
        }

        self.sample(position as f64 / max as f64)
    }

    /// Sample the gradient at fraction `f` along its offset axis.
    ///
    /// Fractions before the first offset or past the last one clamp to the
    /// end colors. Between stops the bracketing pair is blended; the upper
    /// stop is the first whose offset is strictly greater than `f`.
    pub fn sample(&self, f: f64) -> Color {
        let (first, last) = match self.stops.as_slice() {
            [] => return Color::BLACK,
            [only] => return only.color(),
            [first, .., last] => (first, last),
        };

        // Offsets are sorted, so this is the first stop with offset > f
        let upper = self.stops.partition_point(|stop| stop.offset() <= f);
        if upper == 0 {
            return first.color();
        }
        if upper == self.stops.len() {
            return last.color();
        }

        let lo = &self.stops[upper - 1];
        let hi = &self.stops[upper];
        let frac = (f - lo.offset()) / (hi.offset() - lo.offset());
        lo.color().blend(&hi.color(), frac)
    }

    /// `steps` evenly spaced samples from the first stop to the last.
    pub fn colors(&self, steps: usize) -> Vec<Color> {
        let max = steps.saturating_sub(1);
        (0..steps).map(|i| self.color_at(i, max)).collect()
    }
}

/// Offsets used when a gradient is built without explicit ones.
///
/// The first offset is `0`, the last is `1`, and interior stop `i` sits at
/// `i / n`. Note this is not an even split (`i / (n - 1)`): interior stops
/// crowd towards the start. Existing gradients are tuned against this
/// spacing, so it is kept.
///
/// ```
/// use jzazbz::implicit_offsets;
/// assert_eq!(implicit_offsets(2), vec![0.0, 1.0]);
/// assert_eq!(implicit_offsets(4), vec![0.0, 0.25, 0.5, 1.0]);
/// ```
pub fn implicit_offsets(n: usize) -> Vec<f64> {
    let step = 1.0 / n as f64;
    let mut offsets: Vec<f64> = (0..n).map(|i| step * i as f64).collect();
    if let Some(last) = offsets.last_mut() {
        *last = 1.0;
    }
    offsets
}

fn check_sorted(offsets: impl Iterator<Item = f64>) -> Result<(), GradientError> {
    let mut prev: Option<f64> = None;
    for (index, offset) in offsets.enumerate() {
        if offset.is_nan() || prev.is_some_and(|p| offset < p) {
            return Err(GradientError::UnsortedOffsets { index });
        }
        prev = Some(offset);
    }
    Ok(())
}
