use jzazbz::{GradientError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown gradient: {0}")]
    UnknownGradient(String),

    #[error("Invalid gradient: {0}")]
    InvalidGradient(#[from] GradientError),

    #[error("Invalid color {input:?}: {source}")]
    InvalidColor {
        input: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
