//! Test fixtures and constants.

/// Gradient stop sets used across tests
pub mod stops {
    pub const SUNSET: [&str; 3] = ["#ff5f6d", "#ffc371", "#47b8e0"];
    pub const RED_BLUE: [&str; 2] = ["#ff0000", "#0000ff"];
    pub const GRAYSCALE: [&str; 2] = ["#000000", "#ffffff"];
}

/// A config with a few named gradients and a non-default default
pub const CONFIG_YAML: &str = r##"
default_gradient: sunset
gradients:
  sunset:
    stops: ["#ff5f6d", "#ffc371", "#47b8e0"]
  hard_edge:
    stops: ["#ff0000", "#00ff00", "#0000ff"]
    offsets: [0.0, 0.5, 0.5]
  broken:
    stops: ["#ffffff"]
    offsets: [0.2, 0.8]
"##;
