//! Normalizer: numeric coercion of the known numeric columns, then zero-fill of the count-like ones.

use crate::models::columns::{NUMERIC, ZERO_FILLED};
use crate::models::{Column, Table};

/// Parse a numeric cell. Anything unparsable (or non-finite) is missing, never an error.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce the numeric columns present in `table` and zero-fill the count-like ones.
///
/// Absent columns are skipped, not created. Age, matches, minutes and PPM keep their
/// missing values. Idempotent: normalizing a normalized table returns an equal table.
pub fn normalize(table: &Table) -> Table {
    normalize_counted(table).0
}

/// `normalize`, also returning how many non-missing cells failed to parse.
pub fn normalize_counted(table: &Table) -> (Table, usize) {
    let mut out = table.clone();
    let mut coerced = 0;

    for name in NUMERIC {
        let Some(column) = table.column(name) else { continue };
        let mut cells = match column {
            Column::Number(cells) => cells.clone(),
            Column::Text(cells) => cells
                .iter()
                .map(|cell| {
                    let raw = cell.as_deref()?;
                    let parsed = parse_number(raw);
                    if parsed.is_none() {
                        coerced += 1;
                    }
                    parsed
                })
                .collect(),
        };
        if ZERO_FILLED.contains(&name) {
            for cell in cells.iter_mut().filter(|c| c.is_none()) {
                *cell = Some(0.0);
            }
        }
        out.set_column(name.to_string(), Column::Number(cells));
    }

    if coerced > 0 {
        log::debug!("{} numeric cell(s) could not be parsed and are now missing", coerced);
    }
    (out, coerced)
}
