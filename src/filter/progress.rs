//! Per-shard progress reporting for record filtering
//!
//! Shows the share of shards scanned so far, redrawn in place on stdout.

use crate::constants::progress::{PROGRESS_CHARS, TEMPLATE};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::{debug, warn};

/// Progress reporter for a filtering run
pub struct FilterProgress {
    progress_bar: ProgressBar,
    total_shards: usize,
}

impl FilterProgress {
    /// Set up progress reporting for `total_shards` shards
    ///
    /// When `enabled` is false the bar is hidden but still counts, so callers
    /// never branch on whether progress is shown.
    pub fn new(total_shards: usize, search_term: &str, enabled: bool) -> Self {
        let progress_bar = if enabled {
            ProgressBar::with_draw_target(Some(total_shards as u64), ProgressDrawTarget::stdout())
        } else {
            ProgressBar::hidden()
        };
        progress_bar.set_length(total_shards as u64);

        match ProgressStyle::default_bar().template(TEMPLATE) {
            Ok(style) => progress_bar.set_style(style.progress_chars(PROGRESS_CHARS)),
            Err(e) => warn!("Invalid progress template, using default style: {}", e),
        }
        progress_bar.set_message(search_term.to_string());

        debug!("Progress initialized for {} shards", total_shards);
        Self {
            progress_bar,
            total_shards,
        }
    }

    /// Record one fully scanned shard
    pub fn shard_done(&self) {
        self.progress_bar.inc(1);
    }

    /// Shards scanned so far
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Percentage of shards scanned, 100 for an empty run
    pub fn percent(&self) -> f64 {
        if self.total_shards == 0 {
            100.0
        } else {
            self.position() as f64 * 100.0 / self.total_shards as f64
        }
    }

    /// Leave the final state on screen
    pub fn finish(&self) {
        self.progress_bar.finish();
    }
}
