#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the temperature map dashboard.

use temp_map_dashboard::DashboardConfig;
use temp_map_server::{ServerSettings, run_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = DashboardConfig::load(None).map_err(std::io::Error::other)?;
    run_server(config, ServerSettings::from_env()).await
}
