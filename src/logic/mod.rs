//! Season statistics logic: loading pipeline, filters, and per-page aggregations.

pub mod advanced;
pub mod dashboard;
mod derive;
pub mod filter;
mod loader;
pub mod market;
mod normalize;
mod pipeline;
pub mod performance;
pub mod players;
mod sample;
pub mod stats;

pub use derive::{derive_metrics, per_match};
pub use filter::{apply, position_options, season_options, Selection, ALL};
pub use loader::{load_season_files, read_season_file};
pub use normalize::{normalize, normalize_counted, parse_number};
pub use pipeline::{build_dataset, prepare, DatasetCache};
pub use sample::sample_table;
