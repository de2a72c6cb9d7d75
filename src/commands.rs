//! CLI command implementations.
//!
//! Each command returns its output lines so it can be tested without
//! spawning the binary; `main` only prints them.

use jzazbz::{Color, Gradient};
use std::path::Path;

use crate::error::CommandError;
use crate::models::AppConfig;

fn parse_color(input: &str) -> Result<Color, CommandError> {
    input.parse().map_err(|source| CommandError::InvalidColor {
        input: input.to_string(),
        source,
    })
}

/// Load the config named on the command line, or the defaults without one.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, CommandError> {
    Ok(AppConfig::load(path)?)
}

/// Show a hex color in JzAzBz and both display output forms.
pub fn convert(input: &str) -> Result<Vec<String>, CommandError> {
    let color = parse_color(input)?;
    let [r, g, b, a] = color.rgba();

    Ok(vec![
        format!("jzazbz {:.9} {:.9} {:.9}", color.j(), color.a(), color.b()),
        format!("hex    {}", color.hex()),
        format!("rgba   {r} {g} {b} {a}"),
    ])
}

/// Sample `steps` evenly spaced hex colors from an ad-hoc gradient.
///
/// Unlike the lenient library constructors, a malformed stop color or an
/// invalid offset list is reported rather than rendered as black.
pub fn sample<S: AsRef<str>>(
    stops: &[S],
    offsets: &[f64],
    steps: usize,
) -> Result<Vec<String>, CommandError> {
    for stop in stops {
        parse_color(stop.as_ref())?;
    }
    let gradient = Gradient::try_new(stops, offsets)?;

    tracing::debug!(stops = gradient.len(), steps, "Sampling gradient");
    Ok(gradient.colors(steps).iter().map(Color::hex).collect())
}

/// Sample a gradient from the config, or the default one when `name` is `None`.
pub fn sample_named(
    config: &AppConfig,
    name: Option<&str>,
    steps: usize,
) -> Result<Vec<String>, CommandError> {
    let gradient = match name {
        Some(name) => config.gradient(name),
        None => config.get_default_gradient(),
    }
    .ok_or_else(|| {
        let name = name
            .map(str::to_string)
            .or_else(|| config.default_gradient.clone())
            .unwrap_or_default();
        CommandError::UnknownGradient(name)
    })?;

    sample(gradient.stops(), gradient.offsets(), steps)
}

/// Configured gradient names, the default one marked with `*`.
pub fn list(config: &AppConfig) -> Vec<String> {
    config
        .gradient_names()
        .into_iter()
        .map(|name| {
            let marker = if config.default_gradient.as_deref() == Some(name) {
                "*"
            } else {
                " "
            };
            let stops = config
                .gradient(name)
                .map(|g| g.stops().join(" "))
                .unwrap_or_default();
            format!("{marker} {name}: {stops}")
        })
        .collect()
}
