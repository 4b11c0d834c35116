#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Joined map record, value range and join warning types.
//!
//! These are the render-ready outputs of the district join: one record per
//! drawable district, the colour domain for the day, and whatever had to
//! be left off the map.

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use temp_map_district_models::NormalizedKey;
use thiserror::Error;

/// A district boundary combined with its reading for the requested day.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    /// District name from the geometry file.
    pub name: String,
    /// Join key derived from `name`.
    pub key: NormalizedKey,
    /// Parsed district outline.
    pub geometry: MultiPolygon<f64>,
    /// Temperature for the day, or `None` if the district had no reading.
    pub temperature: Option<f64>,
}

/// Colour scale domain for one day.
///
/// `Empty` means no district had a reading; the map is drawn without a
/// scale instead of with `NaN` or zero bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValueRange {
    /// Inclusive bounds over every non-null value (`min <= max`).
    Bounded {
        /// Smallest value.
        min: f64,
        /// Largest value.
        max: f64,
    },
    /// No non-null values.
    Empty,
}

impl ValueRange {
    /// Returns `(min, max)` when bounded.
    #[must_use]
    pub const fn bounds(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Bounded { min, max } => Some((min, max)),
            Self::Empty => None,
        }
    }

    /// Returns `true` for the empty range.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A district that could not be placed on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum JoinWarning {
    /// The district's geometry is not a usable polygon; it is left off
    /// the map.
    #[error("District '{region}' has malformed geometry: {reason}")]
    MalformedGeometry {
        /// District name from the geometry file.
        region: String,
        /// Why the geometry was rejected.
        reason: String,
    },
}

/// Geographic extent of the drawn districts (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBounds {
    /// Minimum longitude.
    pub west: f64,
    /// Minimum latitude.
    pub south: f64,
    /// Maximum longitude.
    pub east: f64,
    /// Maximum latitude.
    pub north: f64,
}

impl MapBounds {
    /// Centre point as `(lon, lat)`.
    #[must_use]
    pub const fn center(&self) -> (f64, f64) {
        (
            self.west.midpoint(self.east),
            self.south.midpoint(self.north),
        )
    }
}

/// Everything the join produces for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutput {
    /// One record per drawable district, in geometry file order.
    pub records: Vec<JoinedRecord>,
    /// Colour domain for the day.
    pub range: ValueRange,
    /// Districts left off the map, with reasons.
    pub warnings: Vec<JoinWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_serializes_with_kind_tag() {
        let bounded = ValueRange::Bounded {
            min: 20.0,
            max: 35.5,
        };
        assert_eq!(
            serde_json::to_value(bounded).unwrap(),
            serde_json::json!({ "kind": "bounded", "min": 20.0, "max": 35.5 })
        );
        assert_eq!(
            serde_json::to_value(ValueRange::Empty).unwrap(),
            serde_json::json!({ "kind": "empty" })
        );
    }

    #[test]
    fn range_accessors() {
        assert_eq!(
            ValueRange::Bounded { min: 1.0, max: 2.0 }.bounds(),
            Some((1.0, 2.0))
        );
        assert!(ValueRange::Empty.is_empty());
        assert!(ValueRange::Empty.bounds().is_none());
    }

    #[test]
    fn warning_message_names_the_district() {
        let warning = JoinWarning::MalformedGeometry {
            region: "Kodagu".to_string(),
            reason: "geometry is missing".to_string(),
        };
        assert_eq!(
            warning.to_string(),
            "District 'Kodagu' has malformed geometry: geometry is missing"
        );
    }

    #[test]
    fn bounds_center() {
        let bounds = MapBounds {
            west: 74.0,
            south: 11.5,
            east: 78.5,
            north: 18.5,
        };
        let (lon, lat) = bounds.center();
        assert!((lon - 76.25).abs() < f64::EPSILON);
        assert!((lat - 15.0).abs() < f64::EPSILON);
    }
}
