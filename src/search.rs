//! End-to-end search pipeline.
//!
//! Discovers shards, filters them for the search term and builds the
//! statistics over the matched readings, in that order.

use crate::config::SearchConfig;
use crate::error::Result;
use crate::filter::{RecordFilter, discovery::discover_shards};
use crate::models::ClimateStats;
use crate::stats::StatsBuilder;

use std::time::Instant;
use tracing::{debug, info};

/// Search runner for one configuration
#[derive(Debug)]
pub struct ClimateSearch {
    config: SearchConfig,
    filter: RecordFilter,
    builder: StatsBuilder,
}

impl ClimateSearch {
    /// Validate the configuration and prepare the pipeline
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            filter: RecordFilter::from_config(&config),
            builder: StatsBuilder::new(),
            config,
        })
    }

    /// Run discovery, filtering and aggregation
    pub fn run(&self) -> Result<ClimateStats> {
        let start_time = Instant::now();

        let shards = discover_shards(&self.config.data_directory_pattern)?;
        info!(
            "Searching {} shards from '{}'",
            shards.len(),
            self.config.data_directory_pattern
        );

        let lines = self.filter.filter(&shards)?;
        let stats = self.builder.build(&lines)?;

        debug!(
            "Search for '{}' finished in {}ms",
            self.config.search_term,
            start_time.elapsed().as_millis()
        );
        Ok(stats)
    }
}

/// Convenience wrapper around [`ClimateSearch`]
pub fn run_search(config: SearchConfig) -> Result<ClimateStats> {
    ClimateSearch::new(config)?.run()
}
