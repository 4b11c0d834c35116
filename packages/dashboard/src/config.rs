//! Dashboard configuration.
//!
//! Read from an optional TOML file, then overridden by environment
//! variables. Every field has a default matching the layout of the
//! `data/` directory the dashboard ships with, so running without any
//! configuration works.
//!
//! ```toml
//! geometry_path = "data/karnataka_districts.geojson"
//! measurements_path = "data/temperature_data.csv"
//!
//! [geometry_fields]
//! name = "district"
//!
//! [columns]
//! district = "district"
//! date = "date"
//! temperature = "temperature"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use temp_map_geography_models::GeometryFieldMapping;
use temp_map_readings_models::MeasurementColumns;

use crate::DashboardError;

/// Config file read when no explicit path is given (if it exists).
pub const DEFAULT_CONFIG_PATH: &str = "temp_map.toml";

/// Environment variable overriding [`DashboardConfig::geometry_path`].
pub const GEOMETRY_PATH_ENV: &str = "TEMP_MAP_GEOMETRY_PATH";

/// Environment variable overriding [`DashboardConfig::measurements_path`].
pub const MEASUREMENTS_PATH_ENV: &str = "TEMP_MAP_MEASUREMENTS_PATH";

/// Where the dashboard's data lives and how to read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// `GeoJSON` file of district boundaries.
    pub geometry_path: PathBuf,
    /// CSV file of temperature readings.
    pub measurements_path: PathBuf,
    /// How district names are found in the geometry features.
    pub geometry_fields: GeometryFieldMapping,
    /// Column names in the measurement CSV.
    pub columns: MeasurementColumns,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            geometry_path: PathBuf::from("data/karnataka_districts.geojson"),
            measurements_path: PathBuf::from("data/temperature_data.csv"),
            geometry_fields: GeometryFieldMapping::default(),
            columns: MeasurementColumns::default(),
        }
    }
}

impl DashboardConfig {
    /// Loads the configuration.
    ///
    /// With `Some(path)` the file must exist. With `None`,
    /// [`DEFAULT_CONFIG_PATH`] is used if present and defaults otherwise.
    /// Environment overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the file cannot be read or is not
    /// valid TOML for this schema.
    pub fn load(path: Option<&Path>) -> Result<Self, DashboardError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    log::debug!("No {DEFAULT_CONFIG_PATH} found, using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config.with_overrides(|name| std::env::var(name).ok()))
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DashboardError> {
        let body = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&body).map_err(|source| DashboardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Applies path overrides from `lookup` (normally the process
    /// environment).
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(GEOMETRY_PATH_ENV).filter(|p| !p.is_empty()) {
            self.geometry_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(MEASUREMENTS_PATH_ENV).filter(|p| !p.is_empty()) {
            self.measurements_path = PathBuf::from(path);
        }
        self
    }
}
