//! Shard discovery for climate datasets
//!
//! Resolves the configured data pattern into the list of CSV shards to
//! scan. A pattern naming an existing directory is walked recursively;
//! anything else is expanded as a glob.

use crate::constants::SHARD_EXTENSION;
use crate::error::{ClimateError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Resolve `pattern` into shard paths
///
/// Glob matches keep the order the glob yields. Directory walks are sorted
/// by path so repeated runs see shards in the same order.
pub fn discover_shards(pattern: &str) -> Result<Vec<PathBuf>> {
    let as_path = Path::new(pattern);

    let shards = if as_path.is_dir() {
        debug!("Walking shard directory: {}", as_path.display());
        discover_directory_shards(as_path)?
    } else {
        debug!("Expanding shard glob: {}", pattern);
        discover_glob_shards(pattern)?
    };

    if shards.is_empty() {
        warn!("No CSV shards matched '{}'", pattern);
    } else {
        debug!("Found {} shards for '{}'", shards.len(), pattern);
    }

    Ok(shards)
}

/// Expand a glob pattern, keeping only regular files
fn discover_glob_shards(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| ClimateError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut shards = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            ClimateError::io(path, std::io::Error::from(e))
        })?;

        if path.is_file() {
            shards.push(path);
        }
    }

    Ok(shards)
}

/// Recursively collect CSV files under a directory
fn discover_directory_shards(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut shards = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() && is_csv_file(entry.path()) {
            shards.push(entry.into_path());
        }
    }

    shards.sort();
    Ok(shards)
}

/// Check if a path has a `.csv` extension, ignoring case
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SHARD_EXTENSION))
}
