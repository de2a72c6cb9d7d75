pub mod config;
pub mod gradient_color;
pub mod terminal_color;

pub use config::AppConfig;
pub use gradient_color::GradientColor;
pub use terminal_color::{DynamicColor, TerminalColor};
