//! Tests for the filter module
//!
//! Builds small shard directories in temp dirs and runs discovery and
//! filtering against them.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mod discovery_tests;

pub const SOURCE_HEADER: &str =
    "dt,AverageTemperature,AverageTemperatureUncertainty,City,Country,Latitude,Longitude\n";

/// Write a shard with the given content and return its path
pub fn write_shard(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Two shards of mixed cities, the first with a source header
pub fn create_city_shards(temp_dir: &TempDir) -> Vec<PathBuf> {
    let first = write_shard(
        temp_dir.path(),
        "shard_a.csv",
        &format!(
            "{}{}{}{}",
            SOURCE_HEADER,
            "01-15-2013,16.5,0.3,Seattle,United States,47.42N,122.34W\n",
            "01-15-2013,4.1,0.2,Paris,France,49.03N,2.45E\n",
            "01-16-2013,,0.4,SEATTLE,United States,47.42N,122.34W\n",
        ),
    );
    let second = write_shard(
        temp_dir.path(),
        "shard_b.csv",
        "02-01-2013,7.0,0.5,Seattle,United States,47.42N,122.34W\n\
         02-01-2013,-3.5,0.6,Berlin,Germany,52.24N,13.14E",
    );
    vec![first, second]
}
