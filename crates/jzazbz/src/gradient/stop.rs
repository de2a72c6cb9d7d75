use crate::color::Color;

/// A color anchored at a position along a gradient.
///
/// `offset` is nominally in `0.0..=1.0`; the gradient only requires that
/// offsets never decrease from one stop to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    color: Color,
    offset: f64,
}

impl GradientStop {
    #[inline]
    pub fn new(color: Color, offset: f64) -> Self {
        Self { color, offset }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}
