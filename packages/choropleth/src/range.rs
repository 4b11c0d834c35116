//! Colour domain computation.

use temp_map_choropleth_models::ValueRange;

/// Computes `(min, max)` over `values`, or [`ValueRange::Empty`] when
/// there are none.
///
/// Non-finite values are ignored so a stray `NaN` can never become a
/// bound.
#[must_use]
pub fn compute_value_range(values: impl IntoIterator<Item = f64>) -> ValueRange {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(ValueRange::Empty, |range, v| match range {
            ValueRange::Empty => ValueRange::Bounded { min: v, max: v },
            ValueRange::Bounded { min, max } => ValueRange::Bounded {
                min: min.min(v),
                max: max.max(v),
            },
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded(min: f64, max: f64) -> ValueRange {
        ValueRange::Bounded { min, max }
    }

    #[test]
    fn empty_input_is_empty_range() {
        assert_eq!(compute_value_range(Vec::<f64>::new()), ValueRange::Empty);
    }

    #[test]
    fn single_value_is_degenerate_range() {
        assert_eq!(compute_value_range([34.2]), bounded(34.2, 34.2));
    }

    #[test]
    fn spans_all_values() {
        assert_eq!(
            compute_value_range([31.0, -2.5, 40.25, 12.0]),
            bounded(-2.5, 40.25)
        );
    }

    #[test]
    fn ignores_non_finite_values() {
        assert_eq!(
            compute_value_range([f64::NAN, f64::INFINITY]),
            ValueRange::Empty
        );
        assert_eq!(
            compute_value_range([f64::NAN, 20.0, f64::NEG_INFINITY]),
            bounded(20.0, 20.0)
        );
    }

    #[test]
    fn min_never_exceeds_max() {
        let samples: [&[f64]; 5] = [
            &[1.0],
            &[5.0, 4.0, 3.0],
            &[-10.0, 10.0],
            &[0.0, -0.0],
            &[22.1, 22.1, 22.0, 35.9, 18.4],
        ];
        for values in samples {
            let (min, max) = compute_value_range(values.iter().copied())
                .bounds()
                .expect("non-empty input has bounds");
            assert!(min <= max, "min {min} > max {max} for {values:?}");
            assert!(values.iter().all(|v| (min..=max).contains(v)));
        }
    }
}
