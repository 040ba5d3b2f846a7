//! Integration tests for the full load -> normalize -> derive pipeline, the sample fallback and the cache.

mod common;

use club_stats_web::columns as col;
use club_stats_web::models::IssueLevel;
use club_stats_web::{build_dataset, sample_table, DataConfig, DataSource, DatasetCache};
use common::{row, write_season};

#[test]
fn unreadable_data_dir_falls_back_to_the_sample() {
    let dir = tempfile::tempdir().unwrap();

    let ds = build_dataset(&DataConfig::new(dir.path()));

    assert_eq!(ds.source(), DataSource::Sample);
    assert_eq!(ds.records().len(), 105);
    for name in col::BASE.iter().chain(col::DERIVED.iter()) {
        assert!(ds.table().has_column(name), "missing column {name}");
    }
    // 14 missing files plus the no-data message
    let issues = &ds.report().issues;
    assert_eq!(issues.len(), 15);
    assert_eq!(issues.iter().filter(|i| i.level == IssueLevel::Warning).count(), 14);
    assert_eq!(issues.last().map(|i| i.file.is_none()), Some(true));
    assert!(ds.report().loaded.is_empty());
}

#[test]
fn sample_rows_are_derived() {
    let ds = build_dataset(&DataConfig::new(tempfile::tempdir().unwrap().path()));

    let striker = ds
        .records()
        .iter()
        .find(|r| r.name == "Ayoub El Kaabi")
        .unwrap();
    assert_eq!(striker.goals_per_match, Some(0.5));
    assert_eq!(striker.minutes_per_match, Some(90.0));
    assert_eq!(striker.offensive_contributions, 18.0);
    assert_eq!(striker.total_cards, 3.0);
}

#[test]
fn sample_cycles_seasons_independently_of_players() {
    let t = sample_table();

    assert_eq!(t.len(), 105);
    let season = |i: usize| t.column(col::SEASON).and_then(|c| c.text_at(i));
    let name = |i: usize| t.column(col::NAME).and_then(|c| c.text_at(i));
    assert_eq!(season(0).as_deref(), Some("2011/12"));
    assert_eq!(season(13).as_deref(), Some("2024/25"));
    assert_eq!(season(14).as_deref(), Some("2011/12"));
    assert_eq!(season(15).as_deref(), Some("2011/12"));
    assert_eq!(name(0), name(7));
    assert_ne!(name(0), name(1));
}

#[test]
fn cache_builds_once_and_hands_out_the_same_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_season(dir.path(), "one.csv", &[&row("A", "Défense", "3", "1", "2019/20")]);
    let cache = DatasetCache::new(DataConfig::new(dir.path()).with_season_files(["one.csv"]));

    assert!(!cache.is_loaded());
    let first = cache.get();
    assert!(cache.is_loaded());

    // Files changing after the first load are not seen by the cached dataset.
    write_season(dir.path(), "one.csv", &[]);
    let second = cache.get();

    assert!(std::ptr::eq(first, second));
    assert_eq!(second.source(), DataSource::SeasonFiles);
    assert_eq!(second.records().len(), 1);
}

#[test]
fn coercion_failures_are_counted_in_the_report() {
    let dir = tempfile::tempdir().unwrap();
    write_season(
        dir.path(),
        "s.csv",
        &["A,Défense,vingt,10,1,0,900,0,0,100000,2019/20,1.2", &row("B", "Défense", "10", "x", "2019/20")],
    );

    let ds = build_dataset(&DataConfig::new(dir.path()).with_season_files(["s.csv"]));

    assert_eq!(ds.report().coerced_cells, 2);
    assert_eq!(ds.records()[0].age, None);
    assert_eq!(ds.records()[1].goals, 0.0);
}
