// src/record/reader.rs
//! Streaming reader for line-delimited JSON movie datasets.
//!
//! Malformed lines are a data quality issue, not a systemic failure:
//! they are skipped, counted, and warned about, and the run continues.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use colored::Colorize;

use super::MovieRecord;
use crate::error::{CostarError, Result};

/// Counters accumulated while draining a [`RecordReader`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadStats {
    pub parsed: usize,
    pub malformed: usize,
    pub blank: usize,
}

/// Iterator over the well-formed records of one dataset file.
#[derive(Debug)]
pub struct RecordReader {
    lines: Lines<BufReader<File>>,
    path: PathBuf,
    line_no: usize,
    stats: ReadStats,
}

impl RecordReader {
    /// Opens the dataset for streaming.
    ///
    /// # Errors
    /// Returns `CostarError::Io` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| CostarError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            path: path.to_path_buf(),
            line_no: 0,
            stats: ReadStats::default(),
        })
    }

    /// Counters for everything consumed so far.
    #[must_use]
    pub fn stats(&self) -> ReadStats {
        self.stats
    }
}

impl Iterator for RecordReader {
    type Item = MovieRecord;

    fn next(&mut self) -> Option<MovieRecord> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    self.stats.malformed += 1;
                    warn_skip(&self.path, self.line_no, &e.to_string());
                    continue;
                }
            };
            if line.trim().is_empty() {
                self.stats.blank += 1;
                continue;
            }
            match serde_json::from_str::<MovieRecord>(&line) {
                Ok(record) => {
                    self.stats.parsed += 1;
                    return Some(record);
                }
                Err(e) => {
                    self.stats.malformed += 1;
                    warn_skip(&self.path, self.line_no, &e.to_string());
                }
            }
        }
    }
}

fn warn_skip(path: &Path, line_no: usize, reason: &str) {
    eprintln!(
        "{} skipping {}:{line_no}: {reason}",
        "warning:".yellow().bold(),
        path.display(),
    );
}

/// Reads the whole dataset into memory.
///
/// # Errors
/// Returns `CostarError::Io` if the file cannot be opened; malformed
/// lines are skipped and counted, never fatal.
pub fn read_records(path: &Path) -> Result<(Vec<MovieRecord>, ReadStats)> {
    let mut reader = RecordReader::open(path)?;
    let records: Vec<MovieRecord> = reader.by_ref().collect();
    Ok((records, reader.stats()))
}
