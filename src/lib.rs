//! Climate Search Library
//!
//! Searches sharded historical city climate CSV data for a city name and
//! summarizes the matching temperature readings.
//!
//! This library provides tools for:
//! - Discovering CSV shards from a glob pattern or directory
//! - Streaming shards line by line with a case-insensitive substring filter
//! - Parsing matched lines into typed temperature readings
//! - Computing the mean temperature over the matched set
//! - Typed errors distinguishing empty results from malformed input

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod models;
pub mod schema;
pub mod search;
pub mod stats;

// Re-export commonly used types
pub use config::SearchConfig;
pub use error::{ClimateError, Result};
pub use filter::RecordFilter;
pub use models::{ClimateStats, TemperatureReading};
pub use search::{ClimateSearch, run_search};
pub use stats::StatsBuilder;
