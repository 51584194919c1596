//! Command-line interface components.

use crate::config::SearchConfig;
use crate::constants::DEFAULT_PREVIEW_RECORDS;
use crate::models::ClimateStats;
use crate::search::ClimateSearch;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "climate_search")]
#[command(about = "Search historical city climate CSV shards and summarize temperatures")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// City substring to search for, case-insensitive (defaults to CLIMATE_SEARCH_TERM or "Seattle")
    #[arg(value_name = "SEARCH_TERM")]
    pub search_term: Option<String>,

    /// Glob pattern or directory of CSV shards (defaults to CLIMATE_DATA_PATTERN or ./data/*.csv)
    #[arg(short, long = "data", value_name = "PATTERN")]
    pub data_pattern: Option<String>,

    /// Keep matched records in their original case instead of lowercasing them
    #[arg(long)]
    pub preserve_case: bool,

    /// Skip validating shard header lines against the expected column order
    #[arg(long)]
    pub no_header_check: bool,

    /// Number of parsed records to print
    #[arg(short = 'n', long = "show", default_value_t = DEFAULT_PREVIEW_RECORDS)]
    pub show: usize,

    /// Suppress progress output and all logging below errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Apply CLI argument overrides on top of a base configuration
    pub fn apply_to(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(term) = &self.search_term {
            config.search_term = term.clone();
        }
        if let Some(pattern) = &self.data_pattern {
            config.data_directory_pattern = pattern.clone();
        }
        if self.preserve_case {
            config.preserve_case = true;
        }
        if self.no_header_check {
            config.validate_header = false;
        }
        config.show_progress = self.show_progress();
        config
    }
}

/// Set up structured logging based on CLI arguments
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("climate_search={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using the layered approach (defaults -> env -> args)
pub fn load_configuration(args: &Args) -> SearchConfig {
    args.apply_to(SearchConfig::from_env())
}

/// Run a search and print the report
pub fn run(args: &Args) -> Result<ClimateStats> {
    let config = load_configuration(args);
    let term = config.search_term.clone();
    let pattern = config.data_directory_pattern.clone();

    let search = ClimateSearch::new(config).context("Invalid search configuration")?;
    let stats = search
        .run()
        .with_context(|| format!("Search for '{}' in '{}' failed", term, pattern))?;

    // Progress redraws in place without a trailing newline
    if args.show_progress() {
        println!();
    }
    print_report(&stats, args.show);
    Ok(stats)
}

/// Print the matched count, leading records and mean temperature
pub fn print_report(stats: &ClimateStats, show: usize) {
    println!(
        "{} {}",
        "Matched records:".bright_cyan(),
        stats.len().to_string().bright_white().bold()
    );
    for record in stats.records().iter().take(show) {
        println!("{:?}", record);
    }
    println!(
        "{} {}",
        "Mean temperature:".bright_cyan(),
        stats.mean_temperature().to_string().bright_white().bold()
    );
}
