//! Market value page.

use crate::logic::stats::{group_by, top_n};
use crate::models::PlayerSeasonRecord;
use serde::Serialize;

const TOP_VALUED: usize = 10;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarketKpis {
    pub total: f64,
    /// `None` on an empty view.
    pub mean: Option<f64>,
    /// Name on the most valuable row; `None` unless some value is above zero.
    pub most_valuable: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ValueSummary {
    pub label: String,
    pub total: f64,
    pub mean: f64,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Market {
    pub kpis: MarketKpis,
    pub top_valued: Vec<PlayerSeasonRecord>,
    pub by_position: Vec<ValueSummary>,
    pub by_season: Vec<ValueSummary>,
}

pub fn market_kpis(view: &[&PlayerSeasonRecord]) -> MarketKpis {
    let total: f64 = view.iter().map(|r| r.market_value).sum();
    let mean = (!view.is_empty()).then(|| total / view.len() as f64);
    let most_valuable = top_n(view.iter().copied(), 1, |r| Some(r.market_value))
        .into_iter()
        .find(|r| r.market_value > 0.0)
        .map(|r| r.name.clone());
    MarketKpis {
        total,
        mean,
        most_valuable,
    }
}

pub fn top_valued(view: &[&PlayerSeasonRecord]) -> Vec<PlayerSeasonRecord> {
    top_n(view.iter().copied(), TOP_VALUED, |r| Some(r.market_value))
        .into_iter()
        .cloned()
        .collect()
}

fn summarize<'a>(
    rows: impl IntoIterator<Item = &'a PlayerSeasonRecord>,
    key: impl Fn(&PlayerSeasonRecord) -> &str,
) -> Vec<ValueSummary> {
    group_by(rows, key)
        .into_iter()
        .map(|(label, rows)| {
            let total: f64 = rows.iter().map(|r| r.market_value).sum();
            ValueSummary {
                label,
                total,
                mean: total / rows.len() as f64,
                count: rows.len(),
            }
        })
        .collect()
}

/// Total, mean and count of market value per position.
pub fn value_by_position(view: &[&PlayerSeasonRecord]) -> Vec<ValueSummary> {
    summarize(view.iter().copied(), |r| r.position.as_str())
}

/// Total and mean market value per season, seasons in order.
pub fn value_by_season(records: &[PlayerSeasonRecord]) -> Vec<ValueSummary> {
    summarize(records, |r| r.season.as_str())
}

/// Market page: `view` is the filtered rows, `records` the whole dataset.
pub fn market(view: &[&PlayerSeasonRecord], records: &[PlayerSeasonRecord]) -> Market {
    Market {
        kpis: market_kpis(view),
        top_valued: top_valued(view),
        by_position: value_by_position(view),
        by_season: value_by_season(records),
    }
}
