//! Per-district time series and the list of districts that have readings.

use std::collections::BTreeSet;

use temp_map_district_models::normalize_district_name;
use temp_map_readings_models::{Measurement, TrendPoint};

use crate::ReadingsError;

/// Returns the temperature series for `district`, sorted ascending by date.
///
/// The district is matched by normalized name. When the same day appears
/// more than once for the district, the row that comes last in the table
/// wins, as in the map join.
///
/// # Errors
///
/// Returns [`ReadingsError::UnknownRegion`] if no reading belongs to the
/// district.
pub fn trend_for_district(
    records: &[Measurement],
    district: &str,
) -> Result<Vec<TrendPoint>, ReadingsError> {
    let key = normalize_district_name(district);

    let mut points: Vec<TrendPoint> = records
        .iter()
        .filter(|m| !key.is_empty() && m.key() == key)
        .map(|m| TrendPoint {
            date: m.date,
            temperature: m.temperature,
        })
        .collect();

    if points.is_empty() {
        return Err(ReadingsError::UnknownRegion {
            name: district.to_string(),
        });
    }

    // Stable sort keeps table order within a day, so the last entry of
    // each run is the last row for that day.
    points.sort_by_key(|p| p.date);

    let mut series: Vec<TrendPoint> = Vec::with_capacity(points.len());
    for point in points {
        match series.last_mut() {
            Some(last) if last.date == point.date => *last = point,
            _ => series.push(point),
        }
    }

    Ok(series)
}

/// Returns the distinct districts that have readings, in first-seen order.
///
/// Districts are deduplicated by normalized name; the first spelling
/// encountered (trimmed) is the one returned.
#[must_use]
pub fn district_names(records: &[Measurement]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .filter(|m| seen.insert(m.key()))
        .map(|m| m.district.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reading(district: &str, day: u32, temperature: Option<f64>) -> Measurement {
        Measurement {
            district: district.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            temperature,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn point(d: u32, temperature: Option<f64>) -> TrendPoint {
        TrendPoint {
            date: day(d),
            temperature,
        }
    }

    #[test]
    fn sorts_series_by_date() {
        let records = vec![
            reading("Mysuru", 1, Some(30.0)),
            reading("Mysuru", 3, Some(32.5)),
            reading("Udupi", 2, Some(28.0)),
            reading("Mysuru", 2, Some(31.0)),
        ];

        let series = trend_for_district(&records, "Mysuru").unwrap();
        assert_eq!(
            series,
            vec![
                point(1, Some(30.0)),
                point(2, Some(31.0)),
                point(3, Some(32.5)),
            ]
        );
    }

    #[test]
    fn matches_by_normalized_name() {
        let records = vec![reading(" MYSURU", 1, Some(30.0)), reading("mysuru ", 2, None)];
        let series = trend_for_district(&records, "Mysuru").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[1].temperature, None);
    }

    #[test]
    fn repeated_day_keeps_last_row() {
        let records = vec![
            reading("Mysuru", 1, Some(30.0)),
            reading("Mysuru", 1, Some(99.0)),
            reading("MYSURU", 1, Some(30.5)),
        ];
        let series = trend_for_district(&records, "Mysuru").unwrap();
        assert_eq!(series, vec![point(1, Some(30.5))]);
    }

    #[test]
    fn unknown_district_is_an_error() {
        let records = vec![reading("Mysuru", 1, Some(30.0))];
        match trend_for_district(&records, "Atlantis") {
            Err(ReadingsError::UnknownRegion { name }) => assert_eq!(name, "Atlantis"),
            other => panic!("expected UnknownRegion, got {other:?}"),
        }
        assert!(matches!(
            trend_for_district(&records, "  "),
            Err(ReadingsError::UnknownRegion { .. })
        ));
    }

    #[test]
    fn lists_distinct_districts_in_first_seen_order() {
        let records = vec![
            reading("Mysuru ", 1, Some(30.0)),
            reading("Udupi", 1, Some(28.0)),
            reading("MYSURU", 2, Some(31.0)),
            reading("Kodagu", 2, None),
        ];
        assert_eq!(district_names(&records), ["Mysuru", "Udupi", "Kodagu"]);
    }
}
