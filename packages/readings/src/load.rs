//! Loads temperature readings from CSV.
//!
//! Column positions are resolved from the header row using the configured
//! [`MeasurementColumns`]. Rows with an unparseable date can never match a
//! requested day, so they are skipped and counted rather than failing the
//! whole load.

use std::io::Read;
use std::path::Path;

use temp_map_readings_models::{Measurement, MeasurementColumns};

use crate::ReadingsError;
use crate::parsing::{parse_date, parse_temperature};

/// All readings from one measurement file, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTable {
    /// Parsed readings.
    pub records: Vec<Measurement>,
    /// Number of data rows dropped because of a bad date or empty district.
    pub skipped_rows: usize,
}

/// Reads and parses the measurement file at `path`.
///
/// # Errors
///
/// Returns [`ReadingsError`] if the file cannot be opened, the CSV is
/// malformed, or a configured column is missing.
pub fn load_measurements(
    path: &Path,
    columns: &MeasurementColumns,
) -> Result<MeasurementTable, ReadingsError> {
    let file = std::fs::File::open(path).map_err(|source| ReadingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = parse_measurements(file, columns)?;
    log::info!(
        "Loaded {} readings from {} ({} rows skipped)",
        table.records.len(),
        path.display(),
        table.skipped_rows
    );

    Ok(table)
}

/// Parses CSV readings from any reader.
///
/// # Errors
///
/// Returns [`ReadingsError`] if the CSV is malformed or a configured
/// column is missing from the header.
pub fn parse_measurements<R: Read>(
    reader: R,
    columns: &MeasurementColumns,
) -> Result<MeasurementTable, ReadingsError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let position = |column: &str| {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ReadingsError::MissingColumn {
                column: column.to_string(),
            })
    };
    let district_idx = position(&columns.district)?;
    let date_idx = position(&columns.date)?;
    let temperature_idx = position(&columns.temperature)?;

    let mut table = MeasurementTable::default();

    for (row, result) in reader.records().enumerate() {
        let record = result?;

        let district = record.get(district_idx).unwrap_or("");
        if district.trim().is_empty() {
            log::warn!("Skipping row {}: empty district", row + 1);
            table.skipped_rows += 1;
            continue;
        }

        let raw_date = record.get(date_idx).unwrap_or("");
        let Ok(date) = parse_date(raw_date) else {
            log::warn!(
                "Skipping row {} ({district}): unparseable date '{raw_date}'",
                row + 1
            );
            table.skipped_rows += 1;
            continue;
        };

        let raw_temperature = record.get(temperature_idx).unwrap_or("");
        let temperature = parse_temperature(raw_temperature);
        if temperature.is_none() && !raw_temperature.trim().is_empty() {
            log::debug!(
                "Row {} ({district}, {date}): treating temperature '{raw_temperature}' as missing",
                row + 1
            );
        }

        table.records.push(Measurement {
            district: district.to_string(),
            date,
            temperature,
        });
    }

    Ok(table)
}
