//! jzgrad - perceptually smooth terminal color gradients
//!
//! Configuration, lazily built gradient colors and CLI commands on top of
//! the [`jzazbz`] conversion crate. This library exposes modules for
//! integration testing.

pub mod commands;
pub mod error;
pub mod models;

pub use models::{AppConfig, DynamicColor, GradientColor, TerminalColor};
