//! Substring filtering of climate shards.
//!
//! Streams every shard line by line and keeps only the lines whose
//! lowercased text contains the lowercased search term, so that only the
//! relevant slice of the dataset is ever held in memory.

pub mod discovery;
pub mod progress;
pub mod reader;

#[cfg(test)]
pub mod tests;

use self::{progress::FilterProgress, reader::ShardLines};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::schema::CsvSchema;

use std::path::Path;
use tracing::{debug, info};

/// Case-insensitive substring filter over CSV shards
#[derive(Debug, Clone)]
pub struct RecordFilter {
    search_term: String,
    needle: String,
    preserve_case: bool,
    validate_header: bool,
    show_progress: bool,
    schema: CsvSchema,
}

impl RecordFilter {
    /// Create a filter for `search_term` with source-compatible defaults
    ///
    /// Kept lines are lowercased, headers are validated and no progress is
    /// drawn.
    pub fn new(search_term: impl Into<String>) -> Self {
        let search_term = search_term.into();
        let needle = search_term.to_lowercase();

        Self {
            search_term,
            needle,
            preserve_case: false,
            validate_header: true,
            show_progress: false,
            schema: CsvSchema::default(),
        }
    }

    /// Create a filter from a search configuration
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            preserve_case: config.preserve_case,
            validate_header: config.validate_header,
            show_progress: config.show_progress,
            ..Self::new(config.search_term.clone())
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Case-insensitive containment test
    pub fn matches(&self, line: &str) -> bool {
        line.to_lowercase().contains(&self.needle)
    }

    /// Filter every shard in order and concatenate the kept lines
    ///
    /// The first shard that cannot be opened or read aborts the whole run;
    /// nothing is returned for shards already scanned.
    pub fn filter<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<String>> {
        info!(
            "Filtering {} shards for '{}'",
            paths.len(),
            self.search_term
        );

        let progress = FilterProgress::new(paths.len(), &self.search_term, self.show_progress);
        let mut kept = Vec::new();

        for path in paths {
            let shard_lines = self.filter_shard(path.as_ref())?;
            kept.extend(shard_lines);
            progress.shard_done();
            debug!("Scanned {:.0}% of shards", progress.percent());
        }

        progress.finish();
        info!("Kept {} matching lines", kept.len());
        Ok(kept)
    }

    /// Filter a single shard, preserving line order and terminators
    pub fn filter_shard(&self, path: &Path) -> Result<Vec<String>> {
        let mut lines = ShardLines::open(path)?;
        let mut kept = Vec::new();

        while let Some(line) = lines.next() {
            let line = line?;

            if self.validate_header && lines.line_number() == 1 {
                self.schema.validate_header(path, &line)?;
            }

            let lowered = line.to_lowercase();
            if lowered.contains(&self.needle) {
                kept.push(if self.preserve_case { line } else { lowered });
            }
        }

        debug!(
            "Scanned {} lines in {}, kept {}",
            lines.line_number(),
            lines.path().display(),
            kept.len()
        );
        Ok(kept)
    }
}
