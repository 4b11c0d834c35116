//! Shared parsing utilities for reading rows and user-supplied dates.

use chrono::NaiveDate;

use crate::ReadingsError;

/// Parses a `YYYY-MM-DD` calendar date, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`ReadingsError::InvalidDate`] carrying the rejected input if
/// it is not a valid calendar date in that format.
pub fn parse_date(input: &str) -> Result<NaiveDate, ReadingsError> {
    let invalid = || ReadingsError::InvalidDate {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    if !is_iso_date_shape(trimmed) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

/// Exactly `DDDD-DD-DD`. chrono alone also accepts unpadded fields and a
/// leading sign.
fn is_iso_date_shape(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a temperature cell. Returns `None` if empty, unparseable, or
/// not finite.
#[must_use]
pub fn parse_temperature(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let date = parse_date("2024-06-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn parses_padded_date() {
        assert!(parse_date(" 2024-06-01 ").is_ok());
    }

    #[test]
    fn rejects_invalid_dates() {
        for input in [
            "",
            "not-a-date",
            "2024-02-30",
            "01/06/2024",
            "2024-06-01T00:00:00",
            "2024-6-1",
            "2024-06-1",
            "+2024-06-01",
            "24-06-01",
        ] {
            match parse_date(input) {
                Err(ReadingsError::InvalidDate { input: rejected }) => assert_eq!(rejected, input),
                other => panic!("expected InvalidDate for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parses_temperatures() {
        assert_eq!(parse_temperature("34.2"), Some(34.2));
        assert_eq!(parse_temperature(" -1.5 "), Some(-1.5));
    }

    #[test]
    fn missing_temperatures_are_none() {
        assert_eq!(parse_temperature(""), None);
        assert_eq!(parse_temperature("   "), None);
        assert_eq!(parse_temperature("n/a"), None);
        assert_eq!(parse_temperature("NaN"), None);
        assert_eq!(parse_temperature("inf"), None);
    }
}
