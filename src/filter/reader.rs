//! Lazy line reader over a single shard
//!
//! Yields one line at a time with its original terminator so that peak
//! memory depends on the matched set, never on shard size.

use crate::error::{ClimateError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Iterator over the lines of one shard, terminators included
///
/// The final line of a file has no terminator if the file does not end
/// with one. Reopen the shard to restart iteration.
#[derive(Debug)]
pub struct ShardLines {
    path: PathBuf,
    reader: BufReader<File>,
    line_number: usize,
    finished: bool,
}

impl ShardLines {
    /// Open a shard for line-by-line reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| ClimateError::io(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            line_number: 0,
            finished: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines yielded so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl Iterator for ShardLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.finished = true;
                None
            }
            Ok(_) => {
                self.line_number += 1;
                Some(Ok(line))
            }
            Err(e) => {
                // A failed read leaves the reader in an unknown position
                self.finished = true;
                Some(Err(ClimateError::io(&self.path, e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lines_keep_terminators() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "first,line\nsecond,line\r\nlast,line").unwrap();

        let lines: Vec<String> = ShardLines::open(temp_file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(lines, vec!["first,line\n", "second,line\r\n", "last,line"]);
    }

    #[test]
    fn test_reopen_restarts_iteration() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "a").unwrap();
        writeln!(temp_file, "b").unwrap();

        let mut first = ShardLines::open(temp_file.path()).unwrap();
        assert_eq!(first.path(), temp_file.path());
        assert_eq!(first.next().unwrap().unwrap(), "a\n");
        assert_eq!(first.line_number(), 1);

        let again: Vec<_> = ShardLines::open(temp_file.path()).unwrap().collect();
        assert_eq!(again.len(), 2);
    }

    #[test]
    fn test_empty_shard_yields_nothing() {
        let temp_file = NamedTempFile::new().unwrap();
        let mut lines = ShardLines::open(temp_file.path()).unwrap();
        assert!(lines.next().is_none());
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0x66, 0x6f, 0xff, 0xfe, b'\n']).unwrap();

        let mut lines = ShardLines::open(temp_file.path()).unwrap();
        match lines.next().unwrap().unwrap_err() {
            ClimateError::Io { path, .. } => assert_eq!(path, temp_file.path()),
            other => panic!("Expected Io error, got {:?}", other),
        }
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_missing_shard_fails_to_open() {
        let result = ShardLines::open(Path::new("/nonexistent/shard.csv"));
        assert!(matches!(result, Err(ClimateError::Io { .. })));
    }
}
