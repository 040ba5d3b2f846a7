//! Integration tests for filters and the page aggregations.

use club_stats_web::logic::{advanced, dashboard, market, performance, players};
use club_stats_web::{
    apply, build_dataset, position_options, season_options, DataConfig, PlayerSeasonRecord,
    Selection, Table, ALL,
};

fn rec(name: &str, position: &str, season: &str, matches: f64, goals: f64) -> PlayerSeasonRecord {
    PlayerSeasonRecord {
        name: name.to_string(),
        position: position.to_string(),
        season: season.to_string(),
        matches: Some(matches),
        goals,
        offensive_contributions: goals,
        ..Default::default()
    }
}

fn sample_records() -> Vec<PlayerSeasonRecord> {
    let dir = tempfile::tempdir().unwrap();
    build_dataset(&DataConfig::new(dir.path())).records().to_vec()
}

/* ---------------- Filters ---------------- */

#[test]
fn selection_treats_toutes_and_all_as_no_filter() {
    assert_eq!(Selection::from_labels(Some(ALL), Some("all")), Selection::default());
    assert_eq!(Selection::from_labels(Some(""), None), Selection::default());

    let s = Selection::from_labels(Some("2022/23"), Some("Toutes"));
    assert_eq!(s.season.as_deref(), Some("2022/23"));
    assert!(s.position.is_none());
    assert!(!s.is_all_seasons());
}

#[test]
fn apply_keeps_base_order_and_base_untouched() {
    let records = vec![
        rec("A", "Défense", "2022/23", 10.0, 0.0),
        rec("B", "Avant-centre", "2022/23", 12.0, 5.0),
        rec("C", "Défense", "2023/24", 8.0, 1.0),
        rec("D", "Défense", "2022/23", 3.0, 0.0),
    ];
    let before = records.clone();

    let view = apply(&records, &Selection::from_labels(Some("2022/23"), Some("Défense")));

    let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "D"]);
    assert_eq!(records, before);
    assert_eq!(apply(&records, &Selection::default()).len(), 4);
}

#[test]
fn options_start_with_toutes_then_sorted_values() {
    let records = vec![
        rec("A", "Défense", "2023/24", 1.0, 0.0),
        rec("B", "Ailier droit", "2011/12", 1.0, 0.0),
        rec("C", "Défense", "2023/24", 1.0, 0.0),
    ];

    assert_eq!(season_options(&records), vec![ALL, "2011/12", "2023/24"]);
    assert_eq!(position_options(&records), vec![ALL, "Ailier droit", "Défense"]);
}

/* ---------------- Dashboard ---------------- */

#[test]
fn average_age_leaves_out_missing_ages() {
    let records = vec![
        PlayerSeasonRecord { age: Some(20.0), ..rec("A", "Défense", "2022/23", 1.0, 0.0) },
        PlayerSeasonRecord { age: None, ..rec("B", "Défense", "2022/23", 1.0, 0.0) },
        PlayerSeasonRecord { age: Some(30.0), ..rec("C", "Défense", "2022/23", 1.0, 0.0) },
    ];
    let view = apply(&records, &Selection::default());

    let k = dashboard::kpis(&view);
    assert_eq!(k.average_age, Some(25.0));
    assert_eq!(k.players, 3);

    let ages = dashboard::age_distribution(&view);
    assert_eq!(ages.len(), 2);
    assert_eq!((ages[0].age, ages[0].count), (20, 1));
}

#[test]
fn sample_dashboard_headline_numbers() {
    let records = sample_records();
    let view = apply(&records, &Selection::default());

    let d = dashboard::dashboard(&view, &records);

    assert_eq!(d.kpis.players, 7);
    assert_eq!(d.kpis.total_goals, 450.0);
    assert_eq!(d.kpis.total_assists, 300.0);
    assert_eq!(d.seasons.len(), 14);
    assert_eq!(d.positions[0].label, "Défenseur central");
    assert_eq!(d.positions[0].count, 30);
}

/* ---------------- Performance ---------------- */

#[test]
fn top_scorers_sum_goals_across_seasons() {
    let records = vec![
        rec("A", "Avant-centre", "2022/23", 10.0, 4.0),
        rec("B", "Ailier droit", "2022/23", 10.0, 6.0),
        rec("A", "Avant-centre", "2023/24", 10.0, 5.0),
    ];
    let view = apply(&records, &Selection::default());

    let top = performance::top_scorers(&view);

    assert_eq!(top[0].name, "A");
    assert_eq!(top[0].goals, 9.0);
    assert_eq!(top[0].matches, 20.0);
    assert_eq!(top[1].name, "B");
}

#[test]
fn season_shown_on_row_tables_only_across_all_seasons() {
    let records = vec![
        rec("A", "Défense", "2022/23", 10.0, 1.0),
        rec("A", "Défense", "2023/24", 12.0, 2.0),
    ];

    let all = Selection::from_labels(Some(ALL), None);
    let p = performance::performance(&apply(&records, &all), &all);
    assert!(p.show_season);
    assert_eq!(p.top_contributions.len(), 2);

    let one = Selection::from_labels(Some("2023/24"), None);
    let p = performance::performance(&apply(&records, &one), &one);
    assert!(!p.show_season);
    assert_eq!(p.top_contributions.len(), 1);
    assert_eq!(p.top_scorers[0].goals, 2.0);
}

#[test]
fn most_minutes_skips_rows_without_minutes() {
    let records = vec![
        PlayerSeasonRecord { minutes: Some(900.0), ..rec("A", "Défense", "2022/23", 10.0, 0.0) },
        PlayerSeasonRecord { minutes: None, ..rec("B", "Défense", "2022/23", 10.0, 0.0) },
    ];
    let view = apply(&records, &Selection::default());

    let rows = performance::most_minutes(&view);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "A");
}

/* ---------------- Players ---------------- */

#[test]
fn profile_picks_best_season_and_usual_position() {
    let records = vec![
        rec("A", "Ailier droit", "2021/22", 10.0, 3.0),
        rec("A", "Avant-centre", "2022/23", 20.0, 12.0),
        rec("A", "Avant-centre", "2023/24", 15.0, 7.0),
        rec("B", "Défense", "2022/23", 10.0, 0.0),
    ];

    let p = players::player_profile(&records, "A").unwrap();

    assert_eq!(p.seasons_played, 3);
    assert_eq!(p.first_season, "2021/22");
    assert_eq!(p.last_season, "2023/24");
    assert_eq!(p.position.as_deref(), Some("Avant-centre"));
    assert_eq!(p.total_goals, 22.0);
    assert_eq!(p.best_goal_season.as_deref(), Some("2022/23"));

    let b = players::player_profile(&records, "B").unwrap();
    assert_eq!(b.best_goal_season, None);
    assert!(players::player_profile(&records, "Z").is_none());
}

#[test]
fn comparison_needs_both_players() {
    let records = vec![rec("A", "Défense", "2022/23", 10.0, 1.0)];

    assert!(players::compare_players(&records, "A", "Z").is_none());
    let c = players::compare_players(&records, "A", "A").unwrap();
    assert_eq!(c.first, c.second);
    assert_eq!(c.first.matches, 10.0);
}

/* ---------------- Market ---------------- */

#[test]
fn market_kpis_on_empty_and_valueless_views() {
    let k = market::market_kpis(&[]);
    assert_eq!(k.total, 0.0);
    assert_eq!(k.mean, None);
    assert_eq!(k.most_valuable, None);

    let records = vec![rec("A", "Défense", "2022/23", 1.0, 0.0)];
    let view = apply(&records, &Selection::default());
    assert_eq!(market::market_kpis(&view).most_valuable, None);
}

#[test]
fn market_value_grouped_by_position() {
    let records = vec![
        PlayerSeasonRecord { market_value: 100.0, ..rec("A", "Défense", "2022/23", 1.0, 0.0) },
        PlayerSeasonRecord { market_value: 300.0, ..rec("B", "Défense", "2022/23", 1.0, 0.0) },
        PlayerSeasonRecord { market_value: 50.0, ..rec("C", "Avant-centre", "2022/23", 1.0, 0.0) },
    ];
    let view = apply(&records, &Selection::default());

    let m = market::market(&view, &records);

    assert_eq!(m.kpis.most_valuable.as_deref(), Some("B"));
    assert_eq!(m.by_position.len(), 2);
    let defence = m.by_position.iter().find(|s| s.label == "Défense").unwrap();
    assert_eq!((defence.total, defence.mean, defence.count), (400.0, 200.0, 2));
    assert_eq!(m.top_valued[0].name, "B");
}

/* ---------------- Advanced ---------------- */

#[test]
fn efficiency_ranks_regulars_only() {
    let records = vec![
        PlayerSeasonRecord { minutes: Some(900.0), ..rec("A", "Avant-centre", "2022/23", 10.0, 5.0) },
        PlayerSeasonRecord { minutes: Some(180.0), ..rec("B", "Avant-centre", "2022/23", 2.0, 2.0) },
        PlayerSeasonRecord { minutes: Some(450.0), ..rec("C", "Défense", "2022/23", 6.0, 0.0) },
    ];
    let view = apply(&records, &Selection::default());

    let e = advanced::efficiency(&view);

    let regulars: Vec<&str> = e.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(regulars, vec!["A", "C"]);
    assert_eq!(e.best_goals_per_match[0].name, "A");
    assert_eq!(e.best_goals_per_match[0].goals_per_match, Some(0.5));
    // B has the best minutes per goal even below the match threshold
    assert_eq!(e.best_minutes_per_goal[0].name, "B");
    assert_eq!(e.best_minutes_per_goal.len(), 2);
}

#[test]
fn correlation_of_proportional_columns_is_one() {
    let records: Vec<PlayerSeasonRecord> = (1..=4)
        .map(|i| {
            let g = i as f64;
            PlayerSeasonRecord {
                minutes: Some(g * 90.0),
                market_value: 10.0 - g,
                ..rec(&format!("P{i}"), "Défense", "2022/23", 10.0, g)
            }
        })
        .collect();
    let view = apply(&records, &Selection::default());
    let mut table = Table::new();
    for name in ["Buts", "Minutes jouées", "market_value", "Matchs"] {
        table
            .push_column(name, club_stats_web::Column::Number(vec![None; 4]))
            .unwrap();
    }

    let c = advanced::correlations(&view, &table);

    assert_eq!(c.matrix.columns, vec!["Matchs", "Buts", "Minutes jouées", "market_value"]);
    assert!((c.goals_minutes.unwrap() - 1.0).abs() < 1e-12);
    assert!((c.goals_value.unwrap() + 1.0).abs() < 1e-12);
    // constant matches have no variance
    assert_eq!(c.matrix.get("Matchs", "Buts"), None);
    assert_eq!(c.age_value, None);
}

#[test]
fn records_report_over_the_whole_dataset() {
    let records = vec![
        PlayerSeasonRecord { minutes: Some(600.0), ..rec("A", "Avant-centre", "2022/23", 10.0, 4.0) },
        PlayerSeasonRecord { minutes: Some(600.0), ..rec("A", "Avant-centre", "2022/23", 10.0, 3.0) },
        PlayerSeasonRecord { minutes: Some(1200.0), ..rec("B", "Défense", "2023/24", 20.0, 6.0) },
    ];

    let r = advanced::records_report(&records);

    // A's two rows of the same season count as one season
    assert_eq!(r.records.most_goals_in_season, 7.0);
    assert_eq!(r.squad.distinct_players, 2);
    assert_eq!(r.squad.total_minutes, 2400.0);
    assert_eq!(r.squad.total_hours, 40.0);
    assert_eq!(r.leaders.scorer.as_ref().map(|l| l.name.as_str()), Some("A"));
    assert_eq!(r.leaders.minutes.as_ref().map(|l| l.total), Some(1200.0));
}

#[test]
fn retention_compares_consecutive_seasons() {
    let records = vec![
        rec("X", "Défense", "2021/22", 1.0, 0.0),
        rec("Y", "Défense", "2021/22", 1.0, 0.0),
        rec("Y", "Défense", "2022/23", 1.0, 0.0),
        rec("Z", "Défense", "2022/23", 1.0, 0.0),
        rec("", "Défense", "2022/23", 1.0, 0.0),
        rec("W", "Défense", "2023/24", 1.0, 0.0),
    ];

    let r = advanced::retention(&records);

    assert_eq!(r.len(), 2);
    assert_eq!((r[0].from_season.as_str(), r[0].to_season.as_str()), ("2021/22", "2022/23"));
    assert_eq!((r[0].kept, r[0].squad_size, r[0].rate), (1, 2, 50.0));
    assert_eq!((r[1].kept, r[1].squad_size, r[1].rate), (0, 2, 0.0));
}

#[test]
fn presence_heatmap_fills_absent_seasons_with_zero() {
    let records = vec![
        rec("A", "Défense", "2021/22", 10.0, 0.0),
        rec("A", "Défense", "2022/23", 12.0, 0.0),
        rec("B", "Défense", "2022/23", 30.0, 0.0),
    ];
    let view = apply(&records, &Selection::default());

    let h = advanced::presence_heatmap(&view);

    assert_eq!(h.players, vec!["B", "A"]);
    assert_eq!(h.seasons, vec!["2021/22", "2022/23"]);
    assert_eq!(h.matches, vec![vec![0.0, 30.0], vec![10.0, 12.0]]);
}

#[test]
fn sample_squad_is_fully_retained_and_long_serving() {
    let records = sample_records();
    let view = apply(&records, &Selection::default());

    let loyalty = advanced::loyalty(&view, &records);

    assert_eq!(loyalty.retention.len(), 13);
    assert!(loyalty.retention.iter().all(|r| r.rate == 100.0));
    assert_eq!(loyalty.longevity.len(), 7);
    assert!(loyalty.longevity.iter().all(|l| l.seasons == 14));
}
