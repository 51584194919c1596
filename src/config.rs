//! Configuration management and validation.
//!
//! Replaces module-level constants with an explicit configuration that is
//! layered from defaults, then environment variables, then CLI arguments.

use crate::constants::{DEFAULT_DATA_PATTERN, DEFAULT_SEARCH_TERM, ENV_DATA_PATTERN, ENV_SEARCH_TERM};
use crate::error::{ClimateError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for a climate record search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Glob pattern or directory selecting input CSV shards
    pub data_directory_pattern: String,

    /// Case-insensitive substring to filter city rows by
    pub search_term: String,

    /// Keep matched lines in their original case instead of lowercasing them
    pub preserve_case: bool,

    /// Check each shard's header line (when present) against the column layout
    pub validate_header: bool,

    /// Draw the per-shard progress indicator
    pub show_progress: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            data_directory_pattern: DEFAULT_DATA_PATTERN.to_string(),
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            preserve_case: false,
            validate_header: true,
            show_progress: true,
        }
    }
}

impl SearchConfig {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Self {
        Self::default().apply_env_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay values from an environment-like lookup
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(pattern) = lookup(ENV_DATA_PATTERN) {
            debug!("{} overrides data pattern: {}", ENV_DATA_PATTERN, pattern);
            self.data_directory_pattern = pattern;
        }
        if let Some(term) = lookup(ENV_SEARCH_TERM) {
            debug!("{} overrides search term: {}", ENV_SEARCH_TERM, term);
            self.search_term = term;
        }
        self
    }

    pub fn with_data_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.data_directory_pattern = pattern.into();
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Keep original-case lines in the output
    pub fn with_preserve_case(mut self) -> Self {
        self.preserve_case = true;
        self
    }

    /// Skip header validation
    pub fn without_header_validation(mut self) -> Self {
        self.validate_header = false;
        self
    }

    /// Disable the progress indicator (tests, quiet mode)
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Validate configuration values
    ///
    /// Any search term is accepted; an empty term matches every line.
    pub fn validate(&self) -> Result<()> {
        if self.data_directory_pattern.trim().is_empty() {
            return Err(ClimateError::configuration(
                "Data directory pattern must not be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.data_directory_pattern, "./data/*.csv");
        assert_eq!(config.search_term, "Seattle");
        assert!(!config.preserve_case);
        assert!(config.validate_header);
        assert!(config.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides_are_layered() {
        let env: HashMap<&str, &str> = [
            ("CLIMATE_DATA_PATTERN", "/srv/climate/*.csv"),
            ("CLIMATE_SEARCH_TERM", "Paris"),
        ]
        .into_iter()
        .collect();

        let config = SearchConfig::default()
            .apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_directory_pattern, "/srv/climate/*.csv");
        assert_eq!(config.search_term, "Paris");
    }

    #[test]
    fn test_missing_env_keeps_defaults() {
        let config = SearchConfig::default().apply_env_overrides(|_| None);
        assert_eq!(config.search_term, "Seattle");
    }

    #[test]
    fn test_builder_methods() {
        let config = SearchConfig::default()
            .with_data_pattern("shards/*.csv")
            .with_search_term("berlin")
            .with_preserve_case()
            .without_header_validation()
            .without_progress();

        assert_eq!(config.data_directory_pattern, "shards/*.csv");
        assert_eq!(config.search_term, "berlin");
        assert!(config.preserve_case);
        assert!(!config.validate_header);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_empty_and_space_terms_are_accepted() {
        assert!(SearchConfig::default().with_search_term("").validate().is_ok());
        assert!(SearchConfig::default().with_search_term(" ").validate().is_ok());
    }

    #[test]
    fn test_blank_pattern_is_rejected() {
        let config = SearchConfig::default().with_data_pattern("  ");
        match config.validate().unwrap_err() {
            ClimateError::Configuration { message } => assert!(message.contains("pattern")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }
}
