mod palette_tools;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tessel_core::{Color, Interpolatable, TesselConfig};

#[derive(Parser)]
#[command(
    name = "tessel",
    version,
    about = "Tessel: inspect, mix and list colors"
)]
struct Cli {
    /// Path to a tessel.toml providing palette names and log level
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show channels, packed hex and luminance of a color
    Info {
        /// Hex color (e.g. 3366FF, #3366FFCC) or palette name
        #[arg()]
        color: String,
    },

    /// Interpolate between two colors
    Mix {
        #[arg()]
        from: String,

        #[arg()]
        to: String,

        /// Number of intervals; prints steps + 1 colors
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
        steps: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the resolved palette of a config file
    Palette {
        #[arg()]
        file: PathBuf,
    },

    /// Write a default tessel.toml
    InitConfig {
        #[arg(default_value = "tessel.toml")]
        path: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct MixStop {
    time: f64,
    hex: String,
    color: Color,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Some(palette_tools::load_config(path)?),
        None => None,
    };
    let level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info { color } => cmd_info(&color, config.as_ref()),
        Commands::Mix {
            from,
            to,
            steps,
            json,
        } => cmd_mix(&from, &to, steps, json, config.as_ref()),
        Commands::Palette { file } => palette_tools::list_palette(&file),
        Commands::InitConfig { path } => palette_tools::init_config(&path),
    }
}

fn cmd_info(arg: &str, config: Option<&TesselConfig>) -> Result<()> {
    let color = palette_tools::resolve_color(arg, config)?;
    println!("Color {}", color);
    println!("   Red:       {:.4}", color.red());
    println!("   Green:     {:.4}", color.green());
    println!("   Blue:      {:.4}", color.blue());
    println!("   Alpha:     {:.4}", color.alpha());
    println!("   Packed:    0x{:08X}", color.to_hex());
    println!("   Luminance: {:.4}", color.luminance());
    println!(
        "   Tone:      {}",
        if color.is_dark() { "dark" } else { "light" }
    );
    Ok(())
}

fn cmd_mix(
    from: &str,
    to: &str,
    steps: u32,
    json: bool,
    config: Option<&TesselConfig>,
) -> Result<()> {
    let from = palette_tools::resolve_color(from, config)?;
    let to = palette_tools::resolve_color(to, config)?;
    let stops = mix_stops(&from, &to, steps);
    tracing::debug!("mixed {} stops from {} to {}", stops.len(), from, to);

    if json {
        println!("{}", serde_json::to_string_pretty(&stops)?);
    } else {
        for stop in &stops {
            println!("  {:>5.3}  {}  0x{:08X}", stop.time, stop.hex, stop.color.to_hex());
        }
    }
    Ok(())
}

/// Evenly spaced stops from `from` (t = 0) to `to` (t = 1), inclusive.
fn mix_stops(from: &Color, to: &Color, steps: u32) -> Vec<MixStop> {
    (0..=steps)
        .map(|i| {
            let time = i as f64 / steps as f64;
            let color = from.interpolate(to, time);
            MixStop {
                time,
                hex: color.to_string(),
                color,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_stops_hit_both_ends() {
        let stops = mix_stops(&Color::BLACK, &Color::WHITE, 4);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0].color, Color::BLACK);
        assert_eq!(stops[4].color, Color::WHITE);
        assert_eq!(stops[2].color, Color::new(0.5, 0.5, 0.5, 1.0));
        assert_eq!(stops[2].hex, "#808080");
    }

    #[test]
    fn test_cli_parses_mix() {
        let cli = Cli::try_parse_from(["tessel", "mix", "000000", "FFFFFF", "--steps", "2"]).unwrap();
        match cli.command {
            Commands::Mix { steps, json, .. } => {
                assert_eq!(steps, 2);
                assert!(!json);
            }
            _ => panic!("expected mix"),
        }
        assert!(Cli::try_parse_from(["tessel", "mix", "0", "F", "--steps", "0"]).is_err());
    }
}
