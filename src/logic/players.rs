//! Players page: career profile of one player, and head-to-head comparison of two.

use crate::logic::stats::{group_by, mean, sum};
use crate::models::PlayerSeasonRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One season of a player's career (rows of the same season summed).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonLine {
    pub season: String,
    pub matches: f64,
    pub goals: f64,
    pub assists: f64,
    pub minutes: f64,
    pub yellow_cards: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonPpm {
    pub season: String,
    pub ppm: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub name: String,
    pub seasons_played: usize,
    pub first_season: String,
    pub last_season: String,
    /// Most frequent position; ties go to the alphabetically first.
    pub position: Option<String>,
    pub total_goals: f64,
    /// Season of the row with the most goals; only when the player scored.
    pub best_goal_season: Option<String>,
    pub total_assists: f64,
    pub seasons: Vec<SeasonLine>,
    /// Mean PPM per season; seasons without any PPM are omitted.
    pub ppm_by_season: Vec<SeasonPpm>,
}

/// Career totals used for the comparison radar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerTotals {
    pub name: String,
    pub goals: f64,
    pub assists: f64,
    pub matches: f64,
    pub minutes: f64,
    /// Minutes scaled down by 100 to share an axis with the counts.
    pub minutes_hundreds: f64,
    pub yellow_cards: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerComparison {
    pub first: PlayerTotals,
    pub second: PlayerTotals,
}

/// Sorted distinct player names.
pub fn player_names(records: &[PlayerSeasonRecord]) -> Vec<String> {
    records
        .iter()
        .filter(|r| !r.name.is_empty())
        .map(|r| r.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn rows_of<'a>(records: &'a [PlayerSeasonRecord], name: &str) -> Vec<&'a PlayerSeasonRecord> {
    records.iter().filter(|r| r.name == name).collect()
}

fn most_frequent_position(rows: &[&PlayerSeasonRecord]) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in rows.iter().filter(|r| !r.position.is_empty()) {
        *counts.entry(r.position.as_str()).or_insert(0) += 1;
    }
    let top = counts.values().copied().max()?;
    counts
        .into_iter()
        .find(|(_, c)| *c == top)
        .map(|(p, _)| p.to_string())
}

/// Career profile of `name`, or `None` if no row carries that name.
pub fn player_profile(records: &[PlayerSeasonRecord], name: &str) -> Option<PlayerProfile> {
    let rows = rows_of(records, name);
    if rows.is_empty() {
        return None;
    }
    let by_season = group_by(rows.iter().copied(), |r| r.season.as_str());
    let first_season = by_season.keys().next().cloned().unwrap_or_default();
    let last_season = by_season.keys().next_back().cloned().unwrap_or_default();

    let total_goals: f64 = rows.iter().map(|r| r.goals).sum();
    let best_goal_season = if total_goals > 0.0 {
        rows.iter()
            .fold(None::<&PlayerSeasonRecord>, |best, r| match best {
                Some(b) if b.goals >= r.goals => Some(b),
                _ => Some(*r),
            })
            .map(|r| r.season.clone())
    } else {
        None
    };

    let seasons = by_season
        .iter()
        .map(|(season, rows)| SeasonLine {
            season: season.clone(),
            matches: sum(rows.iter().map(|r| r.matches)),
            goals: rows.iter().map(|r| r.goals).sum(),
            assists: rows.iter().map(|r| r.assists).sum(),
            minutes: sum(rows.iter().map(|r| r.minutes)),
            yellow_cards: rows.iter().map(|r| r.yellow_cards).sum(),
        })
        .collect();
    let ppm_by_season = by_season
        .iter()
        .filter_map(|(season, rows)| {
            mean(rows.iter().map(|r| r.ppm)).map(|ppm| SeasonPpm {
                season: season.clone(),
                ppm,
            })
        })
        .collect();

    Some(PlayerProfile {
        name: name.to_string(),
        seasons_played: by_season.len(),
        first_season,
        last_season,
        position: most_frequent_position(&rows),
        total_goals,
        best_goal_season,
        total_assists: rows.iter().map(|r| r.assists).sum(),
        seasons,
        ppm_by_season,
    })
}

/// Career totals of `name`, or `None` if unknown.
pub fn player_totals(records: &[PlayerSeasonRecord], name: &str) -> Option<PlayerTotals> {
    let rows = rows_of(records, name);
    if rows.is_empty() {
        return None;
    }
    let minutes = sum(rows.iter().map(|r| r.minutes));
    Some(PlayerTotals {
        name: name.to_string(),
        goals: rows.iter().map(|r| r.goals).sum(),
        assists: rows.iter().map(|r| r.assists).sum(),
        matches: sum(rows.iter().map(|r| r.matches)),
        minutes,
        minutes_hundreds: minutes / 100.0,
        yellow_cards: rows.iter().map(|r| r.yellow_cards).sum(),
    })
}

/// Side-by-side totals; `None` if either player is unknown.
pub fn compare_players(
    records: &[PlayerSeasonRecord],
    first: &str,
    second: &str,
) -> Option<PlayerComparison> {
    Some(PlayerComparison {
        first: player_totals(records, first)?,
        second: player_totals(records, second)?,
    })
}
