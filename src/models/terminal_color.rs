use jzazbz::Color;

/// A color that can be handed to a terminal renderer.
///
/// Profile negotiation and degradation happen on the renderer's side; this
/// only exposes the two output forms it consumes.
pub trait TerminalColor {
    /// Gamma-encoded `#rrggbb`.
    fn hex(&self) -> String;

    /// 16-bit linear channels, alpha always `0xFFFF`.
    fn rgba(&self) -> [u16; 4];
}

/// A color that depends on where on screen it is drawn.
///
/// The caller passes the cell position and the extent of the area being
/// painted; nothing is read from an ambient renderer.
pub trait DynamicColor: TerminalColor {
    fn hex_at(&self, x: usize, y: usize, x_max: usize, y_max: usize) -> String;
}

impl TerminalColor for Color {
    fn hex(&self) -> String {
        Color::hex(self)
    }

    fn rgba(&self) -> [u16; 4] {
        Color::rgba(self)
    }
}
