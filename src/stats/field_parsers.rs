//! Field parsing utilities for shard rows
//!
//! Helpers for pulling named columns out of a split row, with the
//! permissive blank-to-zero rule for measurements.

use crate::error::{ClimateError, Result};
use crate::schema::{Column, CsvSchema};

/// Get a required field from a split row
///
/// Only fails when the row is too short to contain the column; the value
/// itself is returned untrimmed.
pub fn get_required_field<'a>(
    fields: &[&'a str],
    schema: &CsvSchema,
    column: Column,
    index: usize,
) -> Result<&'a str> {
    schema
        .field(fields, column)
        .ok_or(ClimateError::MalformedRow {
            index,
            expected: schema.column_count(),
            found: fields.len(),
        })
}

/// Parse a measurement column, treating blank or whitespace-only values as 0.0
pub fn parse_measurement(
    fields: &[&str],
    schema: &CsvSchema,
    column: Column,
    index: usize,
) -> Result<f64> {
    let value_str = get_required_field(fields, schema, column, index)?;
    let trimmed = value_str.trim();

    if trimmed.is_empty() {
        return Ok(0.0);
    }

    trimmed
        .parse::<f64>()
        .map_err(|source| ClimateError::InvalidNumber {
            index,
            column: column.name(),
            value: value_str.to_string(),
            source,
        })
}

/// Parse a string column as-is
pub fn parse_string(
    fields: &[&str],
    schema: &CsvSchema,
    column: Column,
    index: usize,
) -> Result<String> {
    get_required_field(fields, schema, column, index).map(str::to_string)
}

/// Parse a string column with surrounding whitespace, including terminators, removed
pub fn parse_trimmed_string(
    fields: &[&str],
    schema: &CsvSchema,
    column: Column,
    index: usize,
) -> Result<String> {
    get_required_field(fields, schema, column, index).map(|s| s.trim().to_string())
}
