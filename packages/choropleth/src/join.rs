//! Left join of district boundaries with one day's readings.
//!
//! Every district whose geometry parses appears exactly once in the
//! output, in geometry file order, whether or not it has a reading. A
//! district without a reading gets `None`, never zero. Districts whose
//! geometry does not parse are left off the map and reported as
//! [`JoinWarning::MalformedGeometry`].
//!
//! When several readings share a normalized district name, the one that
//! comes last in the input wins.

use std::collections::BTreeMap;

use temp_map_choropleth_models::{JoinOutput, JoinWarning, JoinedRecord, MapBounds};
use temp_map_district_models::NormalizedKey;
use temp_map_geography::geometry::{bounding_box, parse_multipolygon};
use temp_map_geography_models::Region;
use temp_map_readings_models::Measurement;

use crate::range::compute_value_range;

/// Joins `regions` with `measurements` (already narrowed to one day).
#[must_use]
pub fn join_regions<'a>(
    regions: &[Region],
    measurements: impl IntoIterator<Item = &'a Measurement>,
) -> JoinOutput {
    let lookup = build_lookup(measurements);

    let mut records = Vec::with_capacity(regions.len());
    let mut warnings = Vec::new();

    for region in regions {
        let geometry = match parse_multipolygon(&region.geometry) {
            Ok(geometry) => geometry,
            Err(e) => {
                log::warn!("Leaving district '{}' off the map: {e}", region.name);
                warnings.push(JoinWarning::MalformedGeometry {
                    region: region.name.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let key = region.key();
        let temperature = lookup.get(&key).copied().flatten();

        records.push(JoinedRecord {
            name: region.name.clone(),
            key,
            geometry,
            temperature,
        });
    }

    log_unmatched(&records, &lookup);

    let range = compute_value_range(records.iter().filter_map(|r| r.temperature));

    JoinOutput {
        records,
        range,
        warnings,
    }
}

/// Computes the extent of every joined district.
#[must_use]
pub fn map_bounds(records: &[JoinedRecord]) -> Option<MapBounds> {
    bounding_box(records.iter().map(|r| &r.geometry)).map(|rect| MapBounds {
        west: rect.min().x,
        south: rect.min().y,
        east: rect.max().x,
        north: rect.max().y,
    })
}

fn build_lookup<'a>(
    measurements: impl IntoIterator<Item = &'a Measurement>,
) -> BTreeMap<NormalizedKey, Option<f64>> {
    let mut lookup = BTreeMap::new();

    for measurement in measurements {
        let key = measurement.key();
        if let Some(previous) = lookup.insert(key, measurement.temperature) {
            log::debug!(
                "Duplicate reading for '{}' on {}: {previous:?} replaced by {:?}",
                measurement.district,
                measurement.date,
                measurement.temperature
            );
        }
    }

    lookup
}

fn log_unmatched(records: &[JoinedRecord], lookup: &BTreeMap<NormalizedKey, Option<f64>>) {
    let without_reading = records
        .iter()
        .filter(|r| !lookup.contains_key(&r.key))
        .count();
    if without_reading > 0 {
        log::info!(
            "{without_reading} of {} districts have no reading for this date",
            records.len()
        );
    }

    for key in lookup.keys() {
        if !records.iter().any(|r| &r.key == key) {
            log::debug!("Reading for '{key}' matches no district boundary");
        }
    }
}
