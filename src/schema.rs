//! Column layout and header validation for city temperature shards.
//!
//! Rows are still split positionally, but every access goes through a
//! named column so that a short row or a reordered shard fails with a
//! clear diagnostic instead of an index error.

use crate::constants::{FIELD_SEPARATOR, HEADER_DATE_NAMES};
use crate::error::{ClimateError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Named columns of a shard row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    AverageTemperature,
    AverageTemperatureUncertainty,
    City,
    Country,
    Latitude,
    Longitude,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Date,
        Column::AverageTemperature,
        Column::AverageTemperatureUncertainty,
        Column::City,
        Column::Country,
        Column::Latitude,
        Column::Longitude,
    ];

    /// Canonical column name
    pub fn name(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::AverageTemperature => "average_temperature",
            Column::AverageTemperatureUncertainty => "average_temperature_uncertainty",
            Column::City => "city",
            Column::Country => "country",
            Column::Latitude => "latitude",
            Column::Longitude => "longitude",
        }
    }
}

/// Column name to index mapping for the fixed shard layout
#[derive(Debug, Clone)]
pub struct CsvSchema {
    name_to_index: HashMap<Column, usize>,
}

impl Default for CsvSchema {
    fn default() -> Self {
        let name_to_index = Column::ALL
            .iter()
            .enumerate()
            .map(|(index, column)| (*column, index))
            .collect();

        Self { name_to_index }
    }
}

impl CsvSchema {
    /// Position of `column` in a split row
    pub fn index(&self, column: Column) -> usize {
        self.name_to_index[&column]
    }

    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }

    /// Fetch a column from an already split row
    pub fn field<'a>(&self, fields: &[&'a str], column: Column) -> Option<&'a str> {
        fields.get(self.index(column)).copied()
    }

    /// Canonical header line for this layout
    pub fn expected_header(&self) -> String {
        Column::ALL
            .iter()
            .map(Column::name)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Check whether a line looks like a column header rather than data
    pub fn is_header(&self, line: &str) -> bool {
        let first = line.split(FIELD_SEPARATOR).next().unwrap_or_default();
        let normalized = normalize_column_name(first);
        HEADER_DATE_NAMES.contains(&normalized.as_str())
    }

    /// Validate a shard's header line against the expected column order
    ///
    /// Lines that are not headers pass unchanged. Source headers use names like
    /// `AverageTemperature` and `dt`, so names are compared after normalization
    /// and the first column accepts any of the known date aliases. Trailing
    /// columns past the known layout are ignored, as rows ignore extra fields.
    pub fn validate_header(&self, path: &Path, line: &str) -> Result<()> {
        if !self.is_header(line) {
            debug!("No header line in {}", path.display());
            return Ok(());
        }

        let found: Vec<String> = line
            .split(FIELD_SEPARATOR)
            .map(normalize_column_name)
            .collect();

        let order_matches = found.len() >= self.column_count()
            && Column::ALL
                .iter()
                .skip(1)
                .all(|column| found[self.index(*column)] == normalize_column_name(column.name()));

        if !order_matches {
            warn!(
                "Schema mismatch in {}: expected {} columns, found {}",
                path.display(),
                self.column_count(),
                found.len()
            );
            return Err(ClimateError::SchemaMismatch {
                path: path.to_path_buf(),
                expected: self.expected_header(),
                found: line.trim_end().to_string(),
            });
        }

        if found.len() > self.column_count() {
            debug!(
                "Ignoring {} trailing header columns in {}",
                found.len() - self.column_count(),
                path.display()
            );
        }

        debug!("Validated header for {}", path.display());
        Ok(())
    }
}

/// Lowercase and drop separators so `AverageTemperature` matches `average_temperature`
fn normalize_column_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
