//! Dashboard page: headline numbers, position and age distributions, season evolution.

use crate::logic::stats::{group_by, mean, sum};
use crate::models::PlayerSeasonRecord;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Kpis {
    /// Distinct player names.
    pub players: usize,
    pub total_goals: f64,
    pub total_assists: f64,
    /// Missing ages are left out; `None` when no row has an age.
    pub average_age: Option<f64>,
    pub total_market_value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgeCount {
    pub age: i64,
    pub count: usize,
}

/// Per-season totals over the whole dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonTotals {
    pub season: String,
    pub goals: f64,
    pub assists: f64,
    pub minutes: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub kpis: Kpis,
    pub positions: Vec<LabelCount>,
    pub ages: Vec<AgeCount>,
    pub seasons: Vec<SeasonTotals>,
}

pub fn kpis(view: &[&PlayerSeasonRecord]) -> Kpis {
    let players = view
        .iter()
        .filter(|r| !r.name.is_empty())
        .map(|r| r.name.as_str())
        .collect::<std::collections::HashSet<_>>()
        .len();
    Kpis {
        players,
        total_goals: view.iter().map(|r| r.goals).sum(),
        total_assists: view.iter().map(|r| r.assists).sum(),
        average_age: mean(view.iter().map(|r| r.age)),
        total_market_value: view.iter().map(|r| r.market_value).sum(),
    }
}

/// Rows per position, most frequent first (ties by name).
pub fn position_distribution(view: &[&PlayerSeasonRecord]) -> Vec<LabelCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in view.iter().filter(|r| !r.position.is_empty()) {
        *counts.entry(r.position.as_str()).or_insert(0) += 1;
    }
    let mut out: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Rows per whole age, youngest first. Missing ages are skipped.
pub fn age_distribution(view: &[&PlayerSeasonRecord]) -> Vec<AgeCount> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for age in view.iter().filter_map(|r| r.age) {
        *counts.entry(age.floor() as i64).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(age, count)| AgeCount { age, count })
        .collect()
}

/// Goals, assists and minutes per season, seasons in order.
pub fn season_evolution(records: &[PlayerSeasonRecord]) -> Vec<SeasonTotals> {
    group_by(records, |r| r.season.as_str())
        .into_iter()
        .map(|(season, rows)| SeasonTotals {
            season,
            goals: rows.iter().map(|r| r.goals).sum(),
            assists: rows.iter().map(|r| r.assists).sum(),
            minutes: sum(rows.iter().map(|r| r.minutes)),
        })
        .collect()
}

/// Dashboard page: `view` is the filtered rows, `records` the whole dataset.
pub fn dashboard(view: &[&PlayerSeasonRecord], records: &[PlayerSeasonRecord]) -> Dashboard {
    Dashboard {
        kpis: kpis(view),
        positions: position_distribution(view),
        ages: age_distribution(view),
        seasons: season_evolution(records),
    }
}
