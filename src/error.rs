//! Error handling for climate record search operations.
//!
//! Provides typed errors for shard discovery, line filtering, row parsing
//! and aggregation failures so callers can tell "no matches" apart from
//! malformed input.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClimateError {
    #[error("IO error reading shard {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid data pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Directory traversal failed: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error("Malformed row at record {index}: expected {expected} fields, found {found}")]
    MalformedRow {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number for {column} at record {index}: '{value}'")]
    InvalidNumber {
        index: usize,
        column: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("No temperature readings matched; mean temperature is undefined")]
    EmptyResult,

    #[error("Invalid date '{value}' (expected MM-DD-YYYY)")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Schema mismatch in shard {path}: expected columns [{expected}], found [{found}]")]
    SchemaMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ClimateError {
    /// Create an I/O error tied to a shard path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the search matched nothing
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::EmptyResult)
    }

    /// True when the failure came from the content of a matched row or shard header
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::MalformedRow { .. } | Self::InvalidNumber { .. } | Self::SchemaMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ClimateError>;
