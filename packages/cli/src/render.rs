//! Plain-text rendering of map and trend views.

use std::fmt;

use temp_map_dashboard::{MapView, Trend};

/// A day's map as a district table.
pub struct MapTable<'a>(pub &'a MapView);

impl fmt::Display for MapTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "Temperature across districts on {}", view.date)?;
        writeln!(f)?;
        writeln!(f, "{:<28} {:>10}  FILL", "DISTRICT", "TEMP (C)")?;
        writeln!(f, "{}", "-".repeat(50))?;

        for record in &view.records {
            let fill = view
                .fill_color(record)
                .map_or_else(|| "-".to_string(), |c| c.to_string());
            writeln!(
                f,
                "{:<28} {:>10}  {fill}",
                record.name,
                format_temperature(record.temperature)
            )?;
        }

        writeln!(f)?;
        match view.range.bounds() {
            Some((min, max)) => writeln!(f, "Colour scale: {min:.1} C to {max:.1} C")?,
            None => writeln!(f, "No data for this date")?,
        }

        for warning in &view.warnings {
            writeln!(f, "warning: {warning}")?;
        }

        Ok(())
    }
}

/// A district's trend as a date table.
pub struct TrendTable<'a>(pub &'a Trend);

impl fmt::Display for TrendTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trend = self.0;

        writeln!(f, "Temperature trend for {}", trend.district)?;
        writeln!(f)?;
        writeln!(f, "{:<12} {:>10}", "DATE", "TEMP (C)")?;
        writeln!(f, "{}", "-".repeat(23))?;
        for point in &trend.points {
            writeln!(
                f,
                "{:<12} {:>10}",
                point.date.to_string(),
                format_temperature(point.temperature)
            )?;
        }

        Ok(())
    }
}

/// Formats a reading to one decimal, `-` when missing.
#[must_use]
pub fn format_temperature(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |t| format!("{t:.1}"))
}
