//! Tests for shard discovery

use super::write_shard;
use crate::error::ClimateError;
use crate::filter::discovery::{discover_shards, is_csv_file};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_glob_pattern_selects_csv_files() {
    let temp_dir = TempDir::new().unwrap();
    write_shard(temp_dir.path(), "a.csv", "x\n");
    write_shard(temp_dir.path(), "b.csv", "y\n");
    write_shard(temp_dir.path(), "notes.txt", "z\n");

    let pattern = temp_dir.path().join("*.csv");
    let mut shards = discover_shards(&pattern.to_string_lossy()).unwrap();
    shards.sort();

    assert_eq!(shards.len(), 2);
    assert!(shards[0].ends_with("a.csv"));
    assert!(shards[1].ends_with("b.csv"));
}

#[test]
fn test_glob_skips_directories() {
    let temp_dir = TempDir::new().unwrap();
    write_shard(temp_dir.path(), "a.csv", "x\n");
    fs::create_dir_all(temp_dir.path().join("dir.csv")).unwrap();

    let pattern = temp_dir.path().join("*.csv");
    let shards = discover_shards(&pattern.to_string_lossy()).unwrap();
    assert_eq!(shards.len(), 1);
}

#[test]
fn test_directory_is_walked_recursively_and_sorted() {
    let temp_dir = TempDir::new().unwrap();
    write_shard(temp_dir.path(), "nested/z.csv", "x\n");
    write_shard(temp_dir.path(), "b.CSV", "x\n");
    write_shard(temp_dir.path(), "a.csv", "x\n");
    write_shard(temp_dir.path(), "readme.md", "x\n");

    let shards = discover_shards(&temp_dir.path().to_string_lossy()).unwrap();

    let names: Vec<String> = shards
        .iter()
        .map(|p| {
            p.strip_prefix(temp_dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    assert_eq!(names, vec!["a.csv", "b.CSV", "nested/z.csv"]);
}

#[test]
fn test_no_matches_is_empty_not_error() {
    let temp_dir = TempDir::new().unwrap();
    let pattern = temp_dir.path().join("*.csv");
    let shards = discover_shards(&pattern.to_string_lossy()).unwrap();
    assert!(shards.is_empty());
}

#[test]
fn test_invalid_glob_is_rejected() {
    match discover_shards("data/[*.csv").unwrap_err() {
        ClimateError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "data/[*.csv"),
        other => panic!("Expected InvalidPattern error, got {:?}", other),
    }
}

#[test]
fn test_is_csv_file() {
    assert!(is_csv_file(Path::new("data/shard.csv")));
    assert!(is_csv_file(Path::new("data/SHARD.CSV")));
    assert!(!is_csv_file(Path::new("data/shard.csv.gz")));
    assert!(!is_csv_file(Path::new("data/shard")));
}
