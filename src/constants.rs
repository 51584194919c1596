//! Application constants for climate search
//!
//! Default configuration values, environment variable names and the
//! fixed column layout of the city temperature shards.

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Default glob selecting input CSV shards
pub const DEFAULT_DATA_PATTERN: &str = "./data/*.csv";

/// Default city search term
pub const DEFAULT_SEARCH_TERM: &str = "Seattle";

/// Number of parsed records echoed by the CLI report
pub const DEFAULT_PREVIEW_RECORDS: usize = 2;

/// Extension of shard files when a directory is given instead of a glob
pub const SHARD_EXTENSION: &str = "csv";

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides `data_directory_pattern`
pub const ENV_DATA_PATTERN: &str = "CLIMATE_DATA_PATTERN";

/// Overrides `search_term`
pub const ENV_SEARCH_TERM: &str = "CLIMATE_SEARCH_TERM";

// =============================================================================
// Shard Layout
// =============================================================================

/// Field separator; shards carry no quoting
pub const FIELD_SEPARATOR: char = ',';

/// First-column names that mark a header line
pub const HEADER_DATE_NAMES: &[&str] = &["dt", "date"];

/// Fixed format of the `date_str` field
pub const DATE_FORMAT: &str = "%m-%d-%Y";

// =============================================================================
// Progress Display
// =============================================================================

pub mod progress {
    /// Template for the per-shard progress indicator
    pub const TEMPLATE: &str =
        "{spinner:.green} Loading city records for '{msg}': [{bar:30.cyan/blue}] {percent}%";

    pub const PROGRESS_CHARS: &str = "#>-";
}
