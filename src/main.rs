use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jzgrad::commands;

#[derive(Parser)]
#[command(name = "jzgrad")]
#[command(about = "Perceptually smooth color gradients in the JzAzBz color space")]
struct Cli {
    /// Config file with named gradients (YAML)
    #[arg(long, global = true, env = "JZGRAD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a hex color in JzAzBz and its display output forms
    Convert {
        /// Hex color (#rrggbb or #rgb, '#' optional)
        color: String,
    },
    /// Sample evenly spaced colors from a gradient
    Sample {
        /// Stop colors as hex; when omitted, a configured gradient is used
        #[arg(value_delimiter = ',')]
        stops: Vec<String>,

        /// Stop offsets in 0..=1, comma-separated, one per stop
        #[arg(short, long, value_delimiter = ',', requires = "stops")]
        offsets: Vec<f64>,

        /// Name of a configured gradient (default: the configured default)
        #[arg(short, long, conflicts_with = "stops")]
        name: Option<String>,

        /// Number of samples
        #[arg(short, long, default_value_t = 10)]
        steps: usize,
    },
    /// List configured gradients
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jzgrad=warn,jzazbz=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let lines = match cli.command {
        Commands::Convert { color } => commands::convert(&color)?,
        Commands::Sample {
            stops,
            offsets,
            name,
            steps,
        } => {
            if stops.is_empty() {
                let config = commands::load_config(cli.config.as_deref())?;
                commands::sample_named(&config, name.as_deref(), steps)?
            } else {
                commands::sample(&stops, &offsets, steps)?
            }
        }
        Commands::List => commands::list(&commands::load_config(cli.config.as_deref())?),
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_offsets_require_stops() {
        let result = Cli::try_parse_from(["jzgrad", "sample", "--offsets", "0.2,0.8"]);
        assert!(result.is_err());

        let result =
            Cli::try_parse_from(["jzgrad", "sample", "--name", "sunset", "-o", "0.2,0.8"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sample_with_stops_and_offsets() {
        let cli = Cli::try_parse_from(["jzgrad", "sample", "#fff,#000", "-o", "0,1", "-s", "3"])
            .unwrap();
        match cli.command {
            Commands::Sample {
                stops,
                offsets,
                name,
                steps,
            } => {
                assert_eq!(stops, vec!["#fff", "#000"]);
                assert_eq!(offsets, vec![0.0, 1.0]);
                assert_eq!(name, None);
                assert_eq!(steps, 3);
            }
            _ => panic!("Expected Sample"),
        }
    }
}
