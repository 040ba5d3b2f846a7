//! Club season statistics web app: library with the data pipeline and page aggregations.

pub mod config;
pub mod logic;
pub mod models;

pub use config::{DataConfig, SEASON_FILES};
pub use logic::{
    apply, build_dataset, derive_metrics, load_season_files, normalize, position_options,
    read_season_file, sample_table, season_options, DatasetCache, Selection, ALL,
};
pub use models::{
    columns, Column, DataSource, Dataset, LoadError, LoadReport, PlayerSeasonRecord, Table,
    TableError,
};
