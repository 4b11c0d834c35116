#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District boundary loading and polygon parsing.
//!
//! Reads a `GeoJSON` `FeatureCollection` of district polygons into
//! [`Region`](temp_map_geography_models::Region) values, and converts the
//! raw geometry of a region into a [`geo::MultiPolygon`] when it is about
//! to be drawn.

pub mod geometry;
pub mod load;

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading district boundaries.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The geometry file could not be read.
    #[error("Failed to read geometry file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is valid JSON but not a usable feature collection.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}
