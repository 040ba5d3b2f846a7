//! Performance page: attack, discipline and playing time breakdowns over the filtered rows.

use crate::logic::filter::Selection;
use crate::logic::stats::{first_position, group_by, sum, top_n};
use crate::models::PlayerSeasonRecord;
use serde::Serialize;

const TOP_SCORERS: usize = 10;
const TOP_CONTRIBUTORS: usize = 5;
const TOP_CARDED: usize = 10;
const TOP_MINUTES: usize = 10;

/// Goals summed over every row of a player in the view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScorerTotal {
    pub name: String,
    pub position: String,
    pub goals: f64,
    pub matches: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionCards {
    pub position: String,
    pub yellow_cards: f64,
    pub red_cards: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionMinutes {
    pub position: String,
    pub minutes: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Performance {
    /// Row tables show the season only when every season is selected.
    pub show_season: bool,
    pub top_scorers: Vec<ScorerTotal>,
    pub top_contributions: Vec<PlayerSeasonRecord>,
    pub cards_by_position: Vec<PositionCards>,
    pub most_carded: Vec<PlayerSeasonRecord>,
    pub minutes_by_position: Vec<PositionMinutes>,
    pub most_minutes: Vec<PlayerSeasonRecord>,
}

/// Top 10 players by summed goals (ties keep name order).
pub fn top_scorers(view: &[&PlayerSeasonRecord]) -> Vec<ScorerTotal> {
    let totals = group_by(view.iter().copied(), |r| r.name.as_str())
        .into_iter()
        .map(|(name, rows)| ScorerTotal {
            position: first_position(&rows),
            goals: rows.iter().map(|r| r.goals).sum(),
            matches: sum(rows.iter().map(|r| r.matches)),
            name,
        });
    top_n(totals, TOP_SCORERS, |s| Some(s.goals))
}

fn top_rows(
    view: &[&PlayerSeasonRecord],
    n: usize,
    key: impl Fn(&PlayerSeasonRecord) -> Option<f64>,
) -> Vec<PlayerSeasonRecord> {
    top_n(view.iter().copied(), n, |r| key(*r))
        .into_iter()
        .cloned()
        .collect()
}

/// Rows with the most goals + assists.
pub fn top_contributions(view: &[&PlayerSeasonRecord]) -> Vec<PlayerSeasonRecord> {
    top_rows(view, TOP_CONTRIBUTORS, |r| Some(r.offensive_contributions))
}

pub fn cards_by_position(view: &[&PlayerSeasonRecord]) -> Vec<PositionCards> {
    group_by(view.iter().copied(), |r| r.position.as_str())
        .into_iter()
        .map(|(position, rows)| PositionCards {
            position,
            yellow_cards: rows.iter().map(|r| r.yellow_cards).sum(),
            red_cards: rows.iter().map(|r| r.red_cards).sum(),
        })
        .collect()
}

/// Rows with the most yellow + red cards.
pub fn most_carded(view: &[&PlayerSeasonRecord]) -> Vec<PlayerSeasonRecord> {
    top_rows(view, TOP_CARDED, |r| Some(r.total_cards))
}

pub fn minutes_by_position(view: &[&PlayerSeasonRecord]) -> Vec<PositionMinutes> {
    group_by(view.iter().copied(), |r| r.position.as_str())
        .into_iter()
        .map(|(position, rows)| PositionMinutes {
            position,
            minutes: sum(rows.iter().map(|r| r.minutes)),
        })
        .collect()
}

/// Rows with the most minutes played; rows without minutes are left out.
pub fn most_minutes(view: &[&PlayerSeasonRecord]) -> Vec<PlayerSeasonRecord> {
    top_rows(view, TOP_MINUTES, |r| r.minutes)
}

pub fn performance(view: &[&PlayerSeasonRecord], selection: &Selection) -> Performance {
    Performance {
        show_season: selection.is_all_seasons(),
        top_scorers: top_scorers(view),
        top_contributions: top_contributions(view),
        cards_by_position: cards_by_position(view),
        most_carded: most_carded(view),
        minutes_by_position: minutes_by_position(view),
        most_minutes: most_minutes(view),
    }
}
