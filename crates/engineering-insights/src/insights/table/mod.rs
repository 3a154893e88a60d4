mod normalizer;
mod parser;

use crate::insights::ColumnMapping;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read review data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid review CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("review data is missing required column '{column}'")]
    MissingColumn { column: String },
    #[error("line {line}: score '{value}' is not a number")]
    InvalidScore { line: u64, value: String },
}

/// One reviewed engineer/category pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub level: String,
    pub track: String,
    pub category: Option<String>,
    pub score: Option<f64>,
}

impl ReviewRecord {
    pub fn new(
        level: impl Into<String>,
        track: impl Into<String>,
        category: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            level: level.into(),
            track: track.into(),
            category: Some(category.into()),
            score: Some(score),
        }
    }
}

/// Review rows loaded once and read by every aggregation.
#[derive(Debug, Clone, Default)]
pub struct ReviewTable {
    records: Vec<ReviewRecord>,
}

impl ReviewTable {
    pub fn from_path<P: AsRef<Path>>(path: P, columns: &ColumnMapping) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, columns)?;
        tracing::debug!(path = %path.display(), rows = table.len(), "loaded review data");
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R, columns: &ColumnMapping) -> Result<Self, TableError> {
        Ok(Self {
            records: parser::parse_records(reader, columns)?,
        })
    }

    pub fn from_records(records: Vec<ReviewRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct categories across every row; the shared x axis.
    pub fn categories(&self) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|record| record.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn distinct_levels(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.level.as_str())
            .collect()
    }

    pub fn distinct_tracks(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.track.as_str())
            .collect()
    }
}
