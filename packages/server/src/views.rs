//! Conversions from dashboard views to API response types.

use geojson::{Feature, FeatureCollection, Geometry};
use temp_map_dashboard::{MapView, Trend};
use temp_map_server_models::{ApiMapView, ApiTrend};

/// Builds the API form of a day's map.
///
/// Each district becomes a `GeoJSON` feature whose properties carry
/// `district`, `temperature` and `fillColor`. The last two are `null` for a
/// district without a reading.
#[must_use]
pub fn api_map_view(view: &MapView) -> ApiMapView {
    let features = view
        .records
        .iter()
        .map(|record| {
            let mut properties = serde_json::Map::new();
            properties.insert(
                "district".to_string(),
                serde_json::Value::String(record.name.clone()),
            );
            properties.insert(
                "temperature".to_string(),
                record
                    .temperature
                    .map_or(serde_json::Value::Null, serde_json::Value::from),
            );
            properties.insert(
                "fillColor".to_string(),
                view.fill_color(record)
                    .map_or(serde_json::Value::Null, |c| {
                        serde_json::Value::String(c.to_string())
                    }),
            );

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(geojson::Value::from(&record.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    ApiMapView {
        date: view.date,
        range: view.range,
        has_data: view.has_data(),
        features: FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        },
        warnings: view.warnings.clone(),
        bounds: view.bounds,
        center: view.bounds.map(|b| {
            let (lon, lat) = b.center();
            [lon, lat]
        }),
    }
}

/// Builds the API form of a district trend.
#[must_use]
pub fn api_trend(trend: Trend) -> ApiTrend {
    ApiTrend {
        district: trend.district,
        points: trend.points,
    }
}
