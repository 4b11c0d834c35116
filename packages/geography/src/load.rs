//! Loads district boundaries from a `GeoJSON` file.
//!
//! Uses the configured [`GeometryFieldMapping`] to pull the district name
//! out of each feature's properties. Features without a usable name are
//! skipped with a warning. Geometry is carried through untouched; see
//! [`crate::geometry`] for validation.

use std::path::Path;

use temp_map_geography_models::{GeometryFieldMapping, Region};

use crate::GeoError;

/// Reads and parses the geometry file at `path`.
///
/// # Errors
///
/// Returns [`GeoError`] if the file cannot be read or is not a `GeoJSON`
/// `FeatureCollection`.
pub fn load_regions(path: &Path, fields: &GeometryFieldMapping) -> Result<Vec<Region>, GeoError> {
    let body = std::fs::read_to_string(path).map_err(|source| GeoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let regions = parse_regions(&body, fields)?;
    log::info!(
        "Loaded {} district boundaries from {}",
        regions.len(),
        path.display()
    );

    Ok(regions)
}

/// Parses a `GeoJSON` `FeatureCollection` body into regions, preserving
/// feature order.
///
/// # Errors
///
/// Returns [`GeoError`] if the body is not valid JSON or has no
/// `features` array.
pub fn parse_regions(body: &str, fields: &GeometryFieldMapping) -> Result<Vec<Region>, GeoError> {
    let json: serde_json::Value = serde_json::from_str(body)?;

    let features = json
        .get("features")
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| GeoError::Conversion {
            message: "No features array in GeoJSON document".to_string(),
        })?;

    let mut regions = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        match feature_to_region(feature, fields) {
            Some(region) => regions.push(region),
            None => log::warn!(
                "Skipping feature {index}: missing or empty '{}' property",
                fields.name
            ),
        }
    }

    Ok(regions)
}

/// Converts a single feature. Returns `None` when the name is missing.
fn feature_to_region(
    feature: &serde_json::Value,
    fields: &GeometryFieldMapping,
) -> Option<Region> {
    let name = feature
        .get("properties")?
        .get(&fields.name)
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())?
        .to_string();

    let geometry = feature
        .get("geometry")
        .cloned()
        .unwrap_or(serde_json::Value::Null);

    Some(Region { name, geometry })
}
