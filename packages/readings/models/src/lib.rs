#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Temperature reading types.
//!
//! A reading is one row of the measurement table: a district, a calendar
//! day and an optional temperature. Rows are kept in file order because
//! the join resolves duplicates by position.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use temp_map_district_models::{NormalizedKey, normalize_district_name};

/// A single temperature reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// District name as it appeared in the source row.
    pub district: String,
    /// Calendar day of the reading.
    pub date: NaiveDate,
    /// Temperature in degrees Celsius, if the row had one.
    pub temperature: Option<f64>,
}

impl Measurement {
    /// Returns the join key for this reading's district.
    #[must_use]
    pub fn key(&self) -> NormalizedKey {
        normalize_district_name(&self.district)
    }
}

/// One point of a district's temperature trend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// Calendar day.
    pub date: NaiveDate,
    /// Temperature on that day, if recorded.
    pub temperature: Option<f64>,
}

/// Header names of the measurement CSV columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementColumns {
    /// Column holding the district name.
    pub district: String,
    /// Column holding the `YYYY-MM-DD` date.
    pub date: String,
    /// Column holding the temperature.
    pub temperature: String,
}

impl Default for MeasurementColumns {
    fn default() -> Self {
        Self {
            district: "district".to_string(),
            date: "date".to_string(),
            temperature: "temperature".to_string(),
        }
    }
}
