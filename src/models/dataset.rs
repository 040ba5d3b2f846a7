//! Dataset, load report, and load errors.

use crate::models::record::PlayerSeasonRecord;
use crate::models::table::Table;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Errors that can occur while loading season files.
#[derive(Debug)]
pub enum LoadError {
    /// Expected season file is absent. Recorded, load continues.
    FileMissing { file: String },
    /// Season file exists but could not be parsed. Recorded, load continues.
    FileUnreadable { file: String, reason: String },
    /// Not a single season file could be read. The caller substitutes the sample dataset.
    NoDataAvailable { issues: Vec<LoadError> },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::FileMissing { file } => write!(f, "File not found: {}", file),
            LoadError::FileUnreadable { file, reason } => {
                write!(f, "Error with {}: {}", file, reason)
            }
            LoadError::NoDataAvailable { issues } => {
                write!(f, "No season file could be loaded ({} issue(s))", issues.len())
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Where the rows came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    SeasonFiles,
    /// Built-in synthetic rows; no season file was readable.
    Sample,
}

/// A season file that was read.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LoadedFile {
    pub file: String,
    pub rows: usize,
}

/// Severity of a load message, for display.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLevel {
    Warning,
    Error,
}

/// A recorded, non-fatal load problem.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LoadIssue {
    pub level: IssueLevel,
    pub file: Option<String>,
    pub message: String,
}

impl From<&LoadError> for LoadIssue {
    fn from(e: &LoadError) -> Self {
        match e {
            LoadError::FileMissing { file } => LoadIssue {
                level: IssueLevel::Warning,
                file: Some(file.clone()),
                message: e.to_string(),
            },
            LoadError::FileUnreadable { file, .. } => LoadIssue {
                level: IssueLevel::Error,
                file: Some(file.clone()),
                message: e.to_string(),
            },
            LoadError::NoDataAvailable { .. } => LoadIssue {
                level: IssueLevel::Error,
                file: None,
                message: e.to_string(),
            },
        }
    }
}

/// Outcome of one load cycle, per file.
#[derive(Clone, Debug, Serialize)]
pub struct LoadReport {
    pub loaded: Vec<LoadedFile>,
    pub issues: Vec<LoadIssue>,
    /// Numeric cells that failed to parse and became missing.
    pub coerced_cells: usize,
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    pub fn new() -> Self {
        Self {
            loaded: Vec::new(),
            issues: Vec::new(),
            coerced_cells: 0,
            loaded_at: Utc::now(),
        }
    }

    pub fn record(&mut self, error: &LoadError) {
        self.issues.push(LoadIssue::from(error));
    }

    pub fn total_rows(&self) -> usize {
        self.loaded.iter().map(|f| f.rows).sum()
    }
}

impl Default for LoadReport {
    fn default() -> Self {
        Self::new()
    }
}

/// The unified, normalized, derived table for a session. Immutable once built.
#[derive(Clone, Debug)]
pub struct Dataset {
    table: Table,
    records: Vec<PlayerSeasonRecord>,
    source: DataSource,
    report: LoadReport,
}

impl Dataset {
    pub fn new(table: Table, source: DataSource, report: LoadReport) -> Self {
        let records = PlayerSeasonRecord::from_table(&table);
        Self {
            table,
            records,
            source,
            report,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn records(&self) -> &[PlayerSeasonRecord] {
        &self.records
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}
