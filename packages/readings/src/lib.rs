#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Temperature reading loading, caching, date filtering and trends.
//!
//! Readings come from a CSV file with `district`, `date` and `temperature`
//! columns. The table is loaded through a [`cache::MeasurementCache`] that
//! reloads only when the file changes on disk, then narrowed to a single
//! day for the map or to a single district for the trend view.

pub mod cache;
pub mod filter;
pub mod load;
pub mod parsing;
pub mod trend;

use std::path::PathBuf;

use thiserror::Error;

pub use load::MeasurementTable;

/// Errors that can occur while loading or querying readings.
#[derive(Debug, Error)]
pub enum ReadingsError {
    /// The measurement file could not be read.
    #[error("Failed to read measurement file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the CSV header.
    #[error("Measurement file has no '{column}' column")]
    MissingColumn {
        /// Configured column name that was not found.
        column: String,
    },

    /// A requested date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// A trend was requested for a district with no readings.
    #[error("Unknown district '{name}'")]
    UnknownRegion {
        /// The requested district name.
        name: String,
    },
}
