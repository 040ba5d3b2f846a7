//! Season file loading: read each expected file, skip the missing or broken ones, concatenate the rest.

use crate::models::{LoadError, LoadReport, LoadedFile, Table};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Read `files` from `dir` in order and stack them into one table.
///
/// A missing file is logged as a warning and an unreadable one as an error; both are
/// recorded in the report and skipped. Row order follows the file list. Fails with
/// `NoDataAvailable` only when no file could be read at all.
pub fn load_season_files<S: AsRef<str>>(
    dir: &Path,
    files: &[S],
) -> Result<(Table, LoadReport), LoadError> {
    let mut report = LoadReport::new();
    let mut tables = Vec::new();
    let mut issues = Vec::new();

    for file in files {
        let file = file.as_ref();
        match read_season_file(dir, file) {
            Ok(table) => {
                log::debug!("Loaded {} ({} rows)", file, table.len());
                report.loaded.push(LoadedFile {
                    file: file.to_string(),
                    rows: table.len(),
                });
                tables.push(table);
            }
            Err(e) => {
                match e {
                    LoadError::FileMissing { .. } => log::warn!("{}", e),
                    _ => log::error!("{}", e),
                }
                report.record(&e);
                issues.push(e);
            }
        }
    }

    if tables.is_empty() {
        return Err(LoadError::NoDataAvailable { issues });
    }

    let table = Table::concat(tables);
    log::info!(
        "Loaded {} rows from {} of {} season file(s)",
        table.len(),
        report.loaded.len(),
        files.len()
    );
    Ok((table, report))
}

/// Read one UTF-8, comma-separated season file with a header row.
pub fn read_season_file(dir: &Path, file: &str) -> Result<Table, LoadError> {
    let path = dir.join(file);
    let handle = File::open(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileMissing {
            file: file.to_string(),
        },
        _ => LoadError::FileUnreadable {
            file: file.to_string(),
            reason: e.to_string(),
        },
    })?;
    Table::from_csv(BufReader::new(handle)).map_err(|e| LoadError::FileUnreadable {
        file: file.to_string(),
        reason: e.to_string(),
    })
}
