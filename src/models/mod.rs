//! Data structures for the season statistics: raw table, typed records, dataset and load report.

pub mod columns;
mod dataset;
mod record;
mod table;

pub use dataset::{
    DataSource, Dataset, IssueLevel, LoadError, LoadIssue, LoadReport, LoadedFile,
};
pub use record::PlayerSeasonRecord;
pub use table::{Column, Table, TableError};
