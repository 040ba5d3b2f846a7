//! Data source configuration.
//! Override with env: DATA_DIR (directory holding the season files, default `data`).

use std::path::PathBuf;

/// Season files expected in the data directory, oldest first.
pub const SEASON_FILES: [&str; 14] = [
    "Merged_WYDAD_201112.csv",
    "Merged_WYDAD_201213.csv",
    "Merged_WYDAD_201314.csv",
    "Merged_WYDAD_201415.csv",
    "Merged_WYDAD_201516.csv",
    "Merged_WYDAD_201617.csv",
    "Merged_WYDAD_201718.csv",
    "Merged_WYDAD_201819.csv",
    "Merged_WYDAD_201920.csv",
    "Merged_WYDAD_202021.csv",
    "Merged_WYDAD_202122.csv",
    "Merged_WYDAD_202223.csv",
    "Merged_WYDAD_202324.csv",
    "Merged_WYDAD_202425.csv",
];

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Where to read season files from, and which ones.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    /// Read and concatenated in this order.
    pub season_files: Vec<String>,
}

impl DataConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let data_dir = std::env::var_os("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        Self::new(data_dir)
    }

    /// Replace the file list (e.g. a subset of seasons).
    pub fn with_season_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.season_files = files.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            season_files: SEASON_FILES.iter().map(|f| f.to_string()).collect(),
        }
    }
}
