//! PlayerSeasonRecord: one typed row of the derived table.

use crate::models::columns as col;
use crate::models::table::Table;
use serde::{Deserialize, Serialize};

/// One player's aggregate for one season, with the derived ratios.
///
/// `Option` fields may be missing and must stay out of averages; plain `f64`
/// count fields are zero when the source cell was missing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeasonRecord {
    pub name: String,
    pub position: String,
    pub age: Option<f64>,
    pub matches: Option<f64>,
    pub goals: f64,
    pub assists: f64,
    pub minutes: Option<f64>,
    pub yellow_cards: f64,
    pub red_cards: f64,
    pub market_value: f64,
    /// "YYYY/YY"; string order is chronological.
    pub season: String,
    /// Points per match, supplied by the source.
    pub ppm: Option<f64>,
    /// Goals / matches; missing when matches is zero or missing.
    pub goals_per_match: Option<f64>,
    /// Minutes / matches; missing when matches is zero or missing.
    pub minutes_per_match: Option<f64>,
    pub offensive_contributions: f64,
    pub total_cards: f64,
}

impl PlayerSeasonRecord {
    /// Typed view of every row of a normalized, derived table.
    pub fn from_table(table: &Table) -> Vec<Self> {
        let text = |name: &str, i: usize| {
            table
                .column(name)
                .and_then(|c| c.text_at(i))
                .unwrap_or_default()
        };
        let number = |name: &str, i: usize| table.number(name).and_then(|c| c[i]);
        let count = |name: &str, i: usize| number(name, i).unwrap_or(0.0);

        (0..table.len())
            .map(|i| Self {
                name: text(col::NAME, i),
                position: text(col::POSITION, i),
                age: number(col::AGE, i),
                matches: number(col::MATCHES, i),
                goals: count(col::GOALS, i),
                assists: count(col::ASSISTS, i),
                minutes: number(col::MINUTES, i),
                yellow_cards: count(col::YELLOW_CARDS, i),
                red_cards: count(col::RED_CARDS, i),
                market_value: count(col::MARKET_VALUE, i),
                season: text(col::SEASON, i),
                ppm: number(col::PPM, i),
                goals_per_match: number(col::GOALS_PER_MATCH, i),
                minutes_per_match: number(col::MINUTES_PER_MATCH, i),
                offensive_contributions: count(col::OFFENSIVE_CONTRIBUTIONS, i),
                total_cards: count(col::TOTAL_CARDS, i),
            })
            .collect()
    }
}
