//! Narrows the reading table to a single calendar day.

use chrono::NaiveDate;
use temp_map_readings_models::Measurement;

/// Returns the readings whose date is exactly `date`, in table order.
///
/// An empty result is a normal outcome (no readings that day), not an
/// error.
#[must_use]
pub fn filter_by_date(records: &[Measurement], date: NaiveDate) -> Vec<&Measurement> {
    records.iter().filter(|m| m.date == date).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(district: &str, day: u32, temperature: f64) -> Measurement {
        Measurement {
            district: district.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            temperature: Some(temperature),
        }
    }

    #[test]
    fn keeps_only_matching_day_in_order() {
        let records = vec![
            reading("Mysuru", 1, 30.0),
            reading("Mysuru", 2, 31.0),
            reading("Udupi", 1, 29.0),
        ];
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let filtered = filter_by_date(&records, day);
        let names: Vec<&str> = filtered.iter().map(|m| m.district.as_str()).collect();
        assert_eq!(names, ["Mysuru", "Udupi"]);
    }

    #[test]
    fn no_match_is_empty() {
        let records = vec![reading("Mysuru", 1, 30.0)];
        let day = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        assert!(filter_by_date(&records, day).is_empty());
    }
}
