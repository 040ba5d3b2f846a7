//! Advanced analytics: efficiency, correlations, records, loyalty (longevity, presence, retention).

use crate::logic::stats::{bottom_n, first_position, group_by, mean, pearson, ratio, sum, top_n};
use crate::models::columns as col;
use crate::models::{PlayerSeasonRecord, Table};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Players need this many matches to enter the goals-per-match ranking.
pub const MIN_MATCHES_FOR_RATIO: f64 = 5.0;
const TOP_EFFICIENCY: usize = 10;
const TOP_LONGEVITY: usize = 15;
const HEATMAP_PLAYERS: usize = 20;

/// Columns of the correlation matrix, in display order.
pub const CORRELATION_COLUMNS: [&str; 8] = [
    col::AGE,
    col::MATCHES,
    col::GOALS,
    col::ASSISTS,
    col::MINUTES,
    col::YELLOW_CARDS,
    col::PPM,
    col::MARKET_VALUE,
];

/* ---------------- Efficiency ---------------- */

/// A player's totals over the view, with per-match and per-goal rates.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Efficiency {
    pub name: String,
    pub position: String,
    pub goals: f64,
    pub matches: f64,
    pub minutes: f64,
    pub assists: f64,
    /// Missing when the player has no matches.
    pub goals_per_match: Option<f64>,
    /// Missing when the player has not scored.
    pub minutes_per_goal: Option<f64>,
    /// Missing when the player has no matches.
    pub contributions_per_match: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EfficiencyReport {
    /// Every player with at least `MIN_MATCHES_FOR_RATIO` matches.
    pub players: Vec<Efficiency>,
    pub best_goals_per_match: Vec<Efficiency>,
    pub best_minutes_per_goal: Vec<Efficiency>,
}

pub fn efficiency_by_player(view: &[&PlayerSeasonRecord]) -> Vec<Efficiency> {
    group_by(view.iter().copied(), |r| r.name.as_str())
        .into_iter()
        .map(|(name, rows)| {
            let goals: f64 = rows.iter().map(|r| r.goals).sum();
            let assists: f64 = rows.iter().map(|r| r.assists).sum();
            let matches = sum(rows.iter().map(|r| r.matches));
            let minutes = sum(rows.iter().map(|r| r.minutes));
            Efficiency {
                position: first_position(&rows),
                goals,
                matches,
                minutes,
                assists,
                goals_per_match: ratio(Some(goals), Some(matches)),
                minutes_per_goal: ratio(Some(minutes), Some(goals)),
                contributions_per_match: ratio(Some(goals + assists), Some(matches)),
                name,
            }
        })
        .collect()
}

pub fn efficiency(view: &[&PlayerSeasonRecord]) -> EfficiencyReport {
    let all = efficiency_by_player(view);
    let regulars: Vec<Efficiency> = all
        .iter()
        .filter(|e| e.matches >= MIN_MATCHES_FOR_RATIO)
        .cloned()
        .collect();
    let best_goals_per_match = top_n(regulars.iter().cloned(), TOP_EFFICIENCY, |e| e.goals_per_match);
    let best_minutes_per_goal = bottom_n(
        all.into_iter().filter(|e| e.goals > 0.0),
        TOP_EFFICIENCY,
        |e| e.minutes_per_goal,
    );
    EfficiencyReport {
        players: regulars,
        best_goals_per_match,
        best_minutes_per_goal,
    }
}

/* ---------------- Correlations ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    /// `values[i][j]` correlates `columns[i]` with `columns[j]`.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Correlations {
    pub matrix: CorrelationMatrix,
    pub goals_minutes: Option<f64>,
    pub age_value: Option<f64>,
    pub goals_value: Option<f64>,
}

fn column_values(view: &[&PlayerSeasonRecord], name: &str) -> Vec<Option<f64>> {
    view.iter()
        .map(|r| match name {
            col::AGE => r.age,
            col::MATCHES => r.matches,
            col::GOALS => Some(r.goals),
            col::ASSISTS => Some(r.assists),
            col::MINUTES => r.minutes,
            col::YELLOW_CARDS => Some(r.yellow_cards),
            col::PPM => r.ppm,
            col::MARKET_VALUE => Some(r.market_value),
            _ => None,
        })
        .collect()
}

/// Pairwise Pearson matrix over the correlation columns that exist in `table`.
pub fn correlation_matrix(view: &[&PlayerSeasonRecord], table: &Table) -> CorrelationMatrix {
    let columns: Vec<String> = CORRELATION_COLUMNS
        .iter()
        .filter(|c| table.has_column(c))
        .map(|c| c.to_string())
        .collect();
    let data: Vec<Vec<Option<f64>>> = columns.iter().map(|c| column_values(view, c)).collect();
    let values = data
        .iter()
        .map(|xs| data.iter().map(|ys| pearson(xs, ys)).collect())
        .collect();
    CorrelationMatrix { columns, values }
}

pub fn correlations(view: &[&PlayerSeasonRecord], table: &Table) -> Correlations {
    let matrix = correlation_matrix(view, table);
    Correlations {
        goals_minutes: matrix.get(col::GOALS, col::MINUTES),
        age_value: matrix.get(col::AGE, col::MARKET_VALUE),
        goals_value: matrix.get(col::GOALS, col::MARKET_VALUE),
        matrix,
    }
}

/* ---------------- Records ---------------- */

/// Single-season bests over the whole dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClubRecords {
    pub most_goals_in_season: f64,
    pub most_assists_in_season: f64,
    pub most_minutes_in_season: f64,
    pub most_yellow_cards: f64,
    pub highest_market_value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SquadTotals {
    pub distinct_players: usize,
    pub total_goals: f64,
    pub total_assists: f64,
    pub total_minutes: f64,
    pub total_hours: f64,
    pub average_age: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leader {
    pub name: String,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Leaders {
    pub scorer: Option<Leader>,
    pub assister: Option<Leader>,
    pub minutes: Option<Leader>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordsReport {
    pub records: ClubRecords,
    pub squad: SquadTotals,
    pub leaders: Leaders,
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, f64::max)
}

pub fn club_records(records: &[PlayerSeasonRecord]) -> ClubRecords {
    let per_player_season: Vec<Vec<&PlayerSeasonRecord>> = group_by(records, |r| r.name.as_str())
        .into_values()
        .flat_map(|rows| group_by(rows, |r| r.season.as_str()).into_values())
        .collect();
    let best = |f: fn(&PlayerSeasonRecord) -> Option<f64>| {
        max_of(per_player_season.iter().map(|rows| sum(rows.iter().copied().map(f))))
    };
    ClubRecords {
        most_goals_in_season: best(|r| Some(r.goals)),
        most_assists_in_season: best(|r| Some(r.assists)),
        most_minutes_in_season: best(|r| r.minutes),
        most_yellow_cards: max_of(records.iter().map(|r| r.yellow_cards)),
        highest_market_value: max_of(records.iter().map(|r| r.market_value)),
    }
}

pub fn squad_totals(records: &[PlayerSeasonRecord]) -> SquadTotals {
    let total_minutes = sum(records.iter().map(|r| r.minutes));
    SquadTotals {
        distinct_players: records
            .iter()
            .filter(|r| !r.name.is_empty())
            .map(|r| r.name.as_str())
            .collect::<HashSet<_>>()
            .len(),
        total_goals: records.iter().map(|r| r.goals).sum(),
        total_assists: records.iter().map(|r| r.assists).sum(),
        total_minutes,
        total_hours: total_minutes / 60.0,
        average_age: mean(records.iter().map(|r| r.age)),
    }
}

fn leader(records: &[PlayerSeasonRecord], f: fn(&PlayerSeasonRecord) -> Option<f64>) -> Option<Leader> {
    let totals = group_by(records, |r| r.name.as_str())
        .into_iter()
        .map(|(name, rows)| Leader {
            total: sum(rows.iter().copied().map(f)),
            name,
        });
    top_n(totals, 1, |l| Some(l.total)).into_iter().next()
}

pub fn leaders(records: &[PlayerSeasonRecord]) -> Leaders {
    Leaders {
        scorer: leader(records, |r| Some(r.goals)),
        assister: leader(records, |r| Some(r.assists)),
        minutes: leader(records, |r| r.minutes),
    }
}

pub fn records_report(records: &[PlayerSeasonRecord]) -> RecordsReport {
    RecordsReport {
        records: club_records(records),
        squad: squad_totals(records),
        leaders: leaders(records),
    }
}

/* ---------------- Loyalty ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Longevity {
    pub name: String,
    pub seasons: usize,
}

/// Matches per player per season for the most used players.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PresenceHeatmap {
    pub players: Vec<String>,
    pub seasons: Vec<String>,
    /// `matches[i][j]`: matches of `players[i]` in `seasons[j]`, 0 when absent.
    pub matches: Vec<Vec<f64>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Retention {
    pub from_season: String,
    pub to_season: String,
    /// Share of `from_season` names also present in `to_season`, in percent.
    pub rate: f64,
    pub kept: usize,
    pub squad_size: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Loyalty {
    pub longevity: Vec<Longevity>,
    pub presence: PresenceHeatmap,
    pub retention: Vec<Retention>,
}

/// Players with the most distinct seasons.
pub fn longevity(view: &[&PlayerSeasonRecord]) -> Vec<Longevity> {
    let counts = group_by(view.iter().copied(), |r| r.name.as_str())
        .into_iter()
        .map(|(name, rows)| Longevity {
            seasons: rows
                .iter()
                .filter(|r| !r.season.is_empty())
                .map(|r| r.season.as_str())
                .collect::<HashSet<_>>()
                .len(),
            name,
        });
    top_n(counts, TOP_LONGEVITY, |l| Some(l.seasons as f64))
}

/// Pivot of matches (name x season) for the 20 players with the most matches.
pub fn presence_heatmap(view: &[&PlayerSeasonRecord]) -> PresenceHeatmap {
    let totals = group_by(view.iter().copied(), |r| r.name.as_str())
        .into_iter()
        .map(|(name, rows)| (name, sum(rows.iter().map(|r| r.matches))));
    let players: Vec<String> = top_n(totals, HEATMAP_PLAYERS, |(_, m)| Some(*m))
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    let chosen: HashSet<&str> = players.iter().map(String::as_str).collect();
    let rows: Vec<&PlayerSeasonRecord> = view
        .iter()
        .copied()
        .filter(|r| chosen.contains(r.name.as_str()))
        .collect();
    let seasons: Vec<String> = rows
        .iter()
        .filter(|r| !r.season.is_empty())
        .map(|r| r.season.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let matches = players
        .iter()
        .map(|p| {
            seasons
                .iter()
                .map(|s| {
                    sum(rows
                        .iter()
                        .filter(|r| r.name == *p && r.season == *s)
                        .map(|r| r.matches))
                })
                .collect()
        })
        .collect();

    PresenceHeatmap {
        players,
        seasons,
        matches,
    }
}

/// Season-over-season squad retention over consecutive seasons in label order.
pub fn retention(records: &[PlayerSeasonRecord]) -> Vec<Retention> {
    let squads: Vec<(String, HashSet<&str>)> = group_by(records, |r| r.season.as_str())
        .into_iter()
        .map(|(season, rows)| {
            let names = rows
                .into_iter()
                .filter(|r| !r.name.is_empty())
                .map(|r| r.name.as_str())
                .collect();
            (season, names)
        })
        .collect();
    squads
        .windows(2)
        .map(|pair| {
            let (from, before) = &pair[0];
            let (to, after) = &pair[1];
            let kept = before.intersection(after).count();
            let rate = if before.is_empty() {
                0.0
            } else {
                kept as f64 / before.len() as f64 * 100.0
            };
            Retention {
                from_season: from.clone(),
                to_season: to.clone(),
                rate,
                kept,
                squad_size: before.len(),
            }
        })
        .collect()
}

/// Loyalty tab: longevity and presence over the view, retention over the whole dataset.
pub fn loyalty(view: &[&PlayerSeasonRecord], records: &[PlayerSeasonRecord]) -> Loyalty {
    Loyalty {
        longevity: longevity(view),
        presence: presence_heatmap(view),
        retention: retention(records),
    }
}
