#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front-end for the temperature map dashboard.
//!
//! Runs a single view (`map`, `trend`, `districts`), starts the API server
//! (`serve`), or, with no subcommand, walks the user through the dashboard
//! interactively: pick a date, see the map, optionally drill into one
//! district's trend.

mod interactive;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use render::{MapTable, TrendTable};
use temp_map_dashboard::{Dashboard, DashboardConfig};
use temp_map_server::{ServerSettings, api_map_view, run_server};

#[derive(Parser)]
#[command(name = "temp_map", about = "District temperature map dashboard")]
struct Cli {
    /// Path to a TOML config file (defaults to `temp_map.toml` if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show district temperatures for a date
    Map {
        /// Date to show (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Print the map as `GeoJSON` instead of a table
        #[arg(long)]
        geojson: bool,
    },
    /// Show one district's temperature trend over time
    Trend {
        /// District name (case and surrounding whitespace are ignored)
        #[arg(long)]
        district: String,
    },
    /// List districts that have temperature readings
    Districts,
    /// Start the HTTP API server
    Serve {
        /// Bind address (overrides `BIND_ADDR`)
        #[arg(long)]
        bind: Option<String>,
        /// Port (overrides `PORT`)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = DashboardConfig::load(cli.config.as_deref())?;

    let Some(command) = cli.command else {
        let dashboard = Dashboard::open(config)?;
        return interactive::run(&dashboard);
    };

    match command {
        Commands::Map { date, geojson } => {
            let dashboard = Dashboard::open(config)?;
            let view = dashboard.map_view_for(&date)?;
            if geojson {
                println!("{}", serde_json::to_string_pretty(&api_map_view(&view))?);
            } else {
                print!("{}", MapTable(&view));
            }
        }
        Commands::Trend { district } => {
            let dashboard = Dashboard::open(config)?;
            let trend = dashboard.trend(&district)?;
            print!("{}", TrendTable(&trend));
        }
        Commands::Districts => {
            let dashboard = Dashboard::open(config)?;
            for name in dashboard.districts()? {
                println!("{name}");
            }
        }
        Commands::Serve { bind, port } => {
            let mut settings = ServerSettings::from_env();
            if let Some(bind) = bind {
                settings.bind_addr = bind;
            }
            if let Some(port) = port {
                settings.port = port;
            }

            log::info!("Starting API server");
            actix_web::rt::System::new().block_on(run_server(config, settings))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_surface_as_display_text() {
        let config = std::env::temp_dir().join("temp_map_cli_no_such_config.toml");
        let _ = std::fs::remove_file(&config);

        let cli = Cli::parse_from([
            "temp_map",
            "--config",
            config.to_str().unwrap(),
            "districts",
        ]);
        let err = run(cli).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::parse_from(["temp_map", "map", "--date", "2024-06-01", "--geojson"]);
        let Some(Commands::Map { date, geojson }) = cli.command else {
            panic!("expected map subcommand");
        };
        assert_eq!(date, "2024-06-01");
        assert!(geojson);

        let cli = Cli::parse_from(["temp_map", "serve", "--port", "9000"]);
        let Some(Commands::Serve { bind, port }) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert!(bind.is_none());
        assert_eq!(port, Some(9000));
    }
}
