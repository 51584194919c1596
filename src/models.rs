//! Core data structures for climate record search.
//!
//! Defines the parsed temperature reading for one shard row and the
//! immutable statistics aggregate built over a matched set.

use crate::constants::DATE_FORMAT;
use crate::error::{ClimateError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Temperature reading for a given day in a specified city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub date_str: String,
    pub average_temperature: f64,
    pub average_temperature_uncertainty: f64,
    pub city: String,
    pub country: String,
    pub lat: String,
    pub lng: String,
}

impl TemperatureReading {
    /// Parse `date_str` as a calendar date
    ///
    /// Validation is deferred until this is called, so a reading with a bad
    /// date is still constructed and counted.
    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_str, DATE_FORMAT).map_err(|source| {
            ClimateError::InvalidDate {
                value: self.date_str.clone(),
                source,
            }
        })
    }
}

/// Mean temperature over a finalized set of readings
#[derive(Debug, Clone, Serialize)]
pub struct ClimateStats {
    records: Vec<TemperatureReading>,
    mean_temperature: f64,
}

impl ClimateStats {
    /// Build statistics from a complete list of readings
    ///
    /// Fails with [`ClimateError::EmptyResult`] when `records` is empty.
    pub fn new(records: Vec<TemperatureReading>) -> Result<Self> {
        if records.is_empty() {
            return Err(ClimateError::EmptyResult);
        }

        let total: f64 = records.iter().map(|r| r.average_temperature).sum();
        let mean_temperature = total / records.len() as f64;

        Ok(Self {
            records,
            mean_temperature,
        })
    }

    pub fn records(&self) -> &[TemperatureReading] {
        &self.records
    }

    pub fn mean_temperature(&self) -> f64 {
        self.mean_temperature
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed value
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<TemperatureReading> {
        self.records
    }
}
