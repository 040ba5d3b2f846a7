//! Derivation stage: the four per-row metrics appended to the normalized table.

use crate::models::columns as col;
use crate::models::{Column, Table};

/// `numerator / matches`, missing when either side is missing or matches is zero.
pub fn per_match(numerator: Option<f64>, matches: Option<f64>) -> Option<f64> {
    match (numerator, matches) {
        (Some(n), Some(m)) if m != 0.0 => Some(n / m),
        _ => None,
    }
}

fn sum(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    Some(a? + b?)
}

/// Return a copy of `table` with the derived columns appended:
/// goals per match, minutes per match, offensive contributions, total cards.
///
/// Input columns are left untouched. An absent input column reads as all-missing.
pub fn derive_metrics(table: &Table) -> Table {
    let n = table.len();
    let missing: Vec<Option<f64>> = vec![None; n];
    let input = |name: &str| table.number(name).unwrap_or(missing.as_slice());

    let goals = input(col::GOALS);
    let assists = input(col::ASSISTS);
    let matches = input(col::MATCHES);
    let minutes = input(col::MINUTES);
    let yellow = input(col::YELLOW_CARDS);
    let red = input(col::RED_CARDS);

    type Cell = Option<f64>;
    let zip_with = |a: &[Cell], b: &[Cell], f: fn(Cell, Cell) -> Cell| {
        Column::Number(a.iter().zip(b).map(|(x, y)| f(*x, *y)).collect())
    };

    let mut out = table.clone();
    out.set_column(col::GOALS_PER_MATCH.to_string(), zip_with(goals, matches, per_match));
    out.set_column(col::MINUTES_PER_MATCH.to_string(), zip_with(minutes, matches, per_match));
    out.set_column(col::OFFENSIVE_CONTRIBUTIONS.to_string(), zip_with(goals, assists, sum));
    out.set_column(col::TOTAL_CARDS.to_string(), zip_with(yellow, red, sum));
    out
}
