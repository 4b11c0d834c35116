#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the temperature map dashboard.
//!
//! Serves the district choropleth for a requested day as a `GeoJSON`
//! feature collection, plus per-district trends and the district list for
//! the map front-end. District boundaries are loaded once at startup and
//! shared by every worker; readings are reloaded when the file changes.

mod handlers;
mod views;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use temp_map_dashboard::{Dashboard, DashboardConfig};

pub use views::{api_map_view, api_trend};

/// Shared application state.
pub struct AppState {
    /// Loaded boundaries and cached readings.
    pub dashboard: Arc<Dashboard>,
}

/// Address the server listens on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Bind address (`BIND_ADDR`, default `127.0.0.1`).
    pub bind_addr: String,
    /// Port (`PORT`, default `8080`).
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerSettings {
    /// Reads `BIND_ADDR` and `PORT`, falling back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}

/// Registers the `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/districts", web::get().to(handlers::districts))
            .route("/map", web::get().to(handlers::map))
            .route("/trend", web::get().to(handlers::trend))
            .route("/reload", web::post().to(handlers::reload)),
    );
}

/// Starts the temperature map API server.
///
/// Loads the district boundaries from `config` and starts the Actix-Web
/// HTTP server. The caller provides the async runtime (e.g. via
/// `#[actix_web::main]`) and initializes logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the boundaries cannot be loaded,
/// or the HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: DashboardConfig, settings: ServerSettings) -> std::io::Result<()> {
    log::info!(
        "Loading district boundaries from {}...",
        config.geometry_path.display()
    );
    let dashboard = Dashboard::open(config).map_err(std::io::Error::other)?;

    let state = web::Data::new(AppState {
        dashboard: Arc::new(dashboard),
    });

    let ServerSettings { bind_addr, port } = settings;
    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
