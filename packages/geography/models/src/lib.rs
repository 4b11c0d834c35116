#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District boundary types.
//!
//! These types describe the polygons the choropleth is drawn over. They are
//! independent of the temperature readings, which are joined on later by
//! normalized district name.

use serde::{Deserialize, Serialize};
use temp_map_district_models::{NormalizedKey, normalize_district_name};

/// Property used for the district name when none is configured.
pub const DEFAULT_NAME_PROPERTY: &str = "district";

/// A district boundary as read from the geometry file.
///
/// The geometry is kept exactly as it appeared in the feature. It is only
/// validated when the region is joined, so that a broken polygon is
/// reported against the district it belongs to instead of aborting the
/// whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// District name as published (never empty).
    pub name: String,
    /// Raw `GeoJSON` geometry object (expected `Polygon` or `MultiPolygon`).
    pub geometry: serde_json::Value,
}

impl Region {
    /// Returns the join key for this region.
    #[must_use]
    pub fn key(&self) -> NormalizedKey {
        normalize_district_name(&self.name)
    }
}

/// Field mapping for extracting the district name from each feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryFieldMapping {
    /// Feature property containing the district name.
    pub name: String,
}

impl Default for GeometryFieldMapping {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME_PROPERTY.to_string(),
        }
    }
}
