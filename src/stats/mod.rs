//! Parsing of matched lines into readings and mean temperature statistics.
//!
//! Consumes the filtered lines exactly once: every line is parsed into a
//! [`TemperatureReading`] before the mean is computed over the full set.

pub mod field_parsers;

#[cfg(test)]
pub mod tests;

use self::field_parsers::{parse_measurement, parse_string, parse_trimmed_string};

use crate::constants::FIELD_SEPARATOR;
use crate::error::{ClimateError, Result};
use crate::models::{ClimateStats, TemperatureReading};
use crate::schema::{Column, CsvSchema};

use tracing::{debug, info};

/// Builds [`ClimateStats`] from raw shard lines
#[derive(Debug, Clone, Default)]
pub struct StatsBuilder {
    schema: CsvSchema,
}

impl StatsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every line, then compute the mean temperature
    ///
    /// Any malformed line aborts the build. An empty input fails with
    /// [`ClimateError::EmptyResult`].
    pub fn build<S: AsRef<str>>(&self, lines: &[S]) -> Result<ClimateStats> {
        let records = lines
            .iter()
            .enumerate()
            .map(|(i, line)| self.parse_line(line.as_ref(), i + 1))
            .collect::<Result<Vec<_>>>()?;

        let stats = ClimateStats::new(records)?;
        info!(
            "Parsed {} readings, mean temperature {:.3}",
            stats.len(),
            stats.mean_temperature()
        );
        Ok(stats)
    }

    /// Parse one line; `index` is its 1-based position in the matched set
    ///
    /// Fields past the last known column are ignored.
    pub fn parse_line(&self, line: &str, index: usize) -> Result<TemperatureReading> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();

        if fields.len() < self.schema.column_count() {
            return Err(ClimateError::MalformedRow {
                index,
                expected: self.schema.column_count(),
                found: fields.len(),
            });
        }
        if fields.len() > self.schema.column_count() {
            debug!(
                "Record {} has {} fields, ignoring the extra {}",
                index,
                fields.len(),
                fields.len() - self.schema.column_count()
            );
        }

        let schema = &self.schema;
        Ok(TemperatureReading {
            date_str: parse_string(&fields, schema, Column::Date, index)?,
            average_temperature: parse_measurement(
                &fields,
                schema,
                Column::AverageTemperature,
                index,
            )?,
            average_temperature_uncertainty: parse_measurement(
                &fields,
                schema,
                Column::AverageTemperatureUncertainty,
                index,
            )?,
            city: parse_string(&fields, schema, Column::City, index)?,
            country: parse_string(&fields, schema, Column::Country, index)?,
            lat: parse_string(&fields, schema, Column::Latitude, index)?,
            lng: parse_trimmed_string(&fields, schema, Column::Longitude, index)?,
        })
    }
}
