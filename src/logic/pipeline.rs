//! Load -> normalize -> derive, with the sample fallback and the session cache.

use crate::config::DataConfig;
use crate::logic::derive::derive_metrics;
use crate::logic::loader::load_season_files;
use crate::logic::normalize::normalize_counted;
use crate::logic::sample::sample_table;
use crate::models::{DataSource, Dataset, LoadError, LoadReport, Table};
use std::sync::OnceLock;

/// Build the session dataset. Never fails: when no season file can be read, the
/// sample table takes their place and the report keeps every per-file issue.
pub fn build_dataset(config: &DataConfig) -> Dataset {
    let (raw, mut report, source) =
        match load_season_files(&config.data_dir, &config.season_files) {
            Ok((table, report)) => (table, report, DataSource::SeasonFiles),
            Err(e) => {
                log::warn!("{}; using sample data", e);
                (sample_table(), fallback_report(&e), DataSource::Sample)
            }
        };
    let table = prepare(&raw, &mut report);
    Dataset::new(table, source, report)
}

/// Normalize and derive a raw table.
pub fn prepare(raw: &Table, report: &mut LoadReport) -> Table {
    let (normalized, coerced) = normalize_counted(raw);
    report.coerced_cells += coerced;
    derive_metrics(&normalized)
}

fn fallback_report(error: &LoadError) -> LoadReport {
    let mut report = LoadReport::new();
    if let LoadError::NoDataAvailable { issues } = error {
        for issue in issues {
            report.record(issue);
        }
    }
    report.record(error);
    report
}

/// Write-once dataset for the life of the process; built on first access.
#[derive(Debug)]
pub struct DatasetCache {
    config: DataConfig,
    dataset: OnceLock<Dataset>,
}

impl DatasetCache {
    pub fn new(config: DataConfig) -> Self {
        Self {
            config,
            dataset: OnceLock::new(),
        }
    }

    pub fn get(&self) -> &Dataset {
        self.dataset.get_or_init(|| build_dataset(&self.config))
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }
}
