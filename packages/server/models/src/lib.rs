#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the temperature map server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the dashboard view types to allow independent evolution of the API
//! contract.

use chrono::NaiveDate;
use geojson::FeatureCollection;
use serde::{Deserialize, Serialize};
use temp_map_choropleth_models::{JoinWarning, MapBounds, ValueRange};
use temp_map_readings_models::TrendPoint;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// Query parameters for the map endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapQueryParams {
    /// Requested day as `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// Query parameters for the trend endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendQueryParams {
    /// District name.
    pub district: Option<String>,
}

/// The choropleth for one day as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMapView {
    /// Requested day.
    pub date: NaiveDate,
    /// Colour domain (`{"kind": "empty"}` when there is no data).
    pub range: ValueRange,
    /// `false` when the front-end should show "no data for this date".
    pub has_data: bool,
    /// One feature per district with `district`, `temperature` and
    /// `fillColor` properties (the latter two nullable).
    pub features: FeatureCollection,
    /// Districts left off the map.
    pub warnings: Vec<JoinWarning>,
    /// Extent of the drawn districts.
    pub bounds: Option<MapBounds>,
    /// Centre of `bounds` as `[lon, lat]`, for the initial map view.
    pub center: Option<[f64; 2]>,
}

/// Result of forcing the readings to be reloaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReload {
    /// Number of districts with readings after the reload.
    pub districts: usize,
}

/// A district's temperature series as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTrend {
    /// District as requested.
    pub district: String,
    /// Points sorted ascending by date.
    pub points: Vec<TrendPoint>,
}
