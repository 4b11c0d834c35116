//! Converts raw region geometry into [`MultiPolygon`]s.
//!
//! Handles both `Polygon` and `MultiPolygon` geometry types. Anything else
//! (a point, a line, a broken coordinate array) is a [`GeometryError`]
//! that the caller reports against the region it came from.

use geo::{BoundingRect, MultiPolygon, Rect};
use thiserror::Error;

/// Why a region's geometry could not be used as a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The feature had no geometry (or `null`).
    #[error("geometry is missing")]
    Missing,

    /// The geometry object is not valid `GeoJSON`.
    #[error("invalid GeoJSON geometry: {0}")]
    Invalid(String),

    /// A valid geometry of a type that cannot be filled.
    #[error("unsupported geometry type '{0}', expected Polygon or MultiPolygon")]
    Unsupported(String),

    /// A `MultiPolygon` with no parts.
    #[error("geometry contains no polygons")]
    Empty,

    /// A polygon whose exterior ring has fewer than three distinct points.
    #[error("polygon {index} has a degenerate exterior ring")]
    DegenerateRing {
        /// Zero-based index of the offending polygon.
        index: usize,
    },
}

/// Parses a raw `GeoJSON` geometry object into a [`MultiPolygon`].
///
/// A `Polygon` is promoted to a one-part `MultiPolygon`.
///
/// # Errors
///
/// Returns [`GeometryError`] if the value is missing, is not valid
/// `GeoJSON`, is not polygonal, or contains no usable rings.
pub fn parse_multipolygon(raw: &serde_json::Value) -> Result<MultiPolygon<f64>, GeometryError> {
    if raw.is_null() {
        return Err(GeometryError::Missing);
    }

    match raw.get("type").and_then(serde_json::Value::as_str) {
        Some("Polygon" | "MultiPolygon") => {}
        Some(other) => return Err(GeometryError::Unsupported(other.to_string())),
        None => return Err(GeometryError::Invalid("missing 'type' member".to_string())),
    }

    let geometry: geojson::Geometry = serde_json::from_value(raw.clone())
        .map_err(|e| GeometryError::Invalid(e.to_string()))?;
    let geometry = geo::Geometry::<f64>::try_from(geometry)
        .map_err(|e| GeometryError::Invalid(e.to_string()))?;

    let multi_polygon = match geometry {
        geo::Geometry::MultiPolygon(mp) => mp,
        geo::Geometry::Polygon(p) => MultiPolygon(vec![p]),
        _ => return Err(GeometryError::Unsupported("unknown".to_string())),
    };

    if multi_polygon.0.is_empty() {
        return Err(GeometryError::Empty);
    }

    // Rings are closed on construction, so a triangle has four coordinates.
    if let Some(index) = multi_polygon
        .0
        .iter()
        .position(|polygon| polygon.exterior().0.len() < 4)
    {
        return Err(GeometryError::DegenerateRing { index });
    }

    Ok(multi_polygon)
}

/// Computes the bounding box enclosing every polygon, or `None` if there
/// are none.
#[must_use]
pub fn bounding_box<'a>(
    polygons: impl IntoIterator<Item = &'a MultiPolygon<f64>>,
) -> Option<Rect<f64>> {
    polygons
        .into_iter()
        .filter_map(|mp| mp.bounding_rect())
        .reduce(|a, b| {
            Rect::new(
                (a.min().x.min(b.min().x), a.min().y.min(b.min().y)),
                (a.max().x.max(b.max().x), a.max().y.max(b.max().y)),
            )
        })
}
