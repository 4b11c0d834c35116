#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard composition root.
//!
//! A [`Dashboard`] loads the district boundaries once, keeps the readings
//! behind a change-aware cache, and answers the three questions the
//! front-ends ask: what does the map look like on a given day, what is a
//! district's temperature trend, and which districts have readings at all.
//!
//! Every call recomputes its view from scratch (filter, join, colour), so
//! a `Dashboard` can be shared between any number of sessions.

pub mod config;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use temp_map_choropleth::{ColorScale, Rgb, join_regions, map_bounds};
use temp_map_choropleth_models::{JoinWarning, JoinedRecord, MapBounds, ValueRange};
use temp_map_geography::GeoError;
use temp_map_geography::load::load_regions;
use temp_map_geography_models::Region;
use temp_map_readings::ReadingsError;
use temp_map_readings::cache::MeasurementCache;
use temp_map_readings::filter::filter_by_date;
use temp_map_readings::parsing::parse_date;
use temp_map_readings::trend::{district_names, trend_for_district};
use thiserror::Error;

pub use config::DashboardConfig;
pub use temp_map_readings_models::TrendPoint;

/// Errors that can occur while serving dashboard views.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Loading district boundaries failed.
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Loading or querying readings failed (includes invalid dates and
    /// unknown districts).
    #[error(transparent)]
    Readings(#[from] ReadingsError),

    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigIo {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid.
    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        /// Config file path.
        path: PathBuf,
        /// TOML parse error.
        source: toml::de::Error,
    },
}

impl DashboardError {
    /// Returns `true` if the request named a malformed date.
    #[must_use]
    pub const fn is_invalid_date(&self) -> bool {
        matches!(self, Self::Readings(ReadingsError::InvalidDate { .. }))
    }

    /// Returns `true` if the request named a district with no readings.
    #[must_use]
    pub const fn is_unknown_region(&self) -> bool {
        matches!(self, Self::Readings(ReadingsError::UnknownRegion { .. }))
    }
}

/// The choropleth for one day.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Requested day.
    pub date: NaiveDate,
    /// One record per drawable district, in geometry file order.
    pub records: Vec<JoinedRecord>,
    /// Colour domain; [`ValueRange::Empty`] when no district has data.
    pub range: ValueRange,
    /// Colour scale built from `range`.
    pub scale: ColorScale,
    /// Districts left off the map.
    pub warnings: Vec<JoinWarning>,
    /// Extent of the drawn districts.
    pub bounds: Option<MapBounds>,
}

impl MapView {
    /// Returns `false` when no district has a reading for the day.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        !self.range.is_empty()
    }

    /// Fill colour for a record, `None` for a neutral fill.
    #[must_use]
    pub fn fill_color(&self, record: &JoinedRecord) -> Option<Rgb> {
        self.scale.color_for(record.temperature)
    }
}

/// A district's temperature series.
#[derive(Debug, Clone, PartialEq)]
pub struct Trend {
    /// District as requested.
    pub district: String,
    /// Readings sorted ascending by date.
    pub points: Vec<TrendPoint>,
}

/// Shared dashboard state: boundaries loaded once, readings cached.
pub struct Dashboard {
    regions: Arc<[Region]>,
    readings: MeasurementCache,
}

impl Dashboard {
    /// Loads the district boundaries and prepares the reading cache.
    ///
    /// The readings file is not touched until the first view is requested.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the geometry file cannot be loaded.
    pub fn open(config: DashboardConfig) -> Result<Self, DashboardError> {
        let regions = load_regions(&config.geometry_path, &config.geometry_fields)?;
        let readings = MeasurementCache::new(config.measurements_path, config.columns);

        Ok(Self {
            regions: regions.into(),
            readings,
        })
    }

    /// Builds the map for `date`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the readings cannot be loaded. Missing
    /// readings and malformed district geometry are not errors; they show
    /// up as `None` values and [`MapView::warnings`].
    pub fn map_view(&self, date: NaiveDate) -> Result<MapView, DashboardError> {
        let table = self.readings.get()?;
        let day = filter_by_date(&table.records, date);
        log::debug!("{} readings on {date}", day.len());

        let joined = join_regions(&self.regions, day);
        if joined.range.is_empty() {
            log::info!("No temperature data for {date}");
        }

        Ok(MapView {
            date,
            bounds: map_bounds(&joined.records),
            scale: ColorScale::viridis(joined.range),
            range: joined.range,
            records: joined.records,
            warnings: joined.warnings,
        })
    }

    /// Parses a `YYYY-MM-DD` date and builds its map.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if `input` is not a valid date (checked
    /// before any data is read) or the readings cannot be loaded.
    pub fn map_view_for(&self, input: &str) -> Result<MapView, DashboardError> {
        let date = parse_date(input)?;
        self.map_view(date)
    }

    /// Returns the temperature trend for `district`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the readings cannot be loaded or the
    /// district has no readings.
    pub fn trend(&self, district: &str) -> Result<Trend, DashboardError> {
        let table = self.readings.get()?;
        let points = trend_for_district(&table.records, district)?;

        Ok(Trend {
            district: district.trim().to_string(),
            points,
        })
    }

    /// Lists the districts that have readings, in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError`] if the readings cannot be loaded.
    pub fn districts(&self) -> Result<Vec<String>, DashboardError> {
        let table = self.readings.get()?;
        Ok(district_names(&table.records))
    }

    /// Forces the readings to be reloaded on the next request.
    pub fn reload_readings(&self) {
        self.readings.invalidate();
    }
}
