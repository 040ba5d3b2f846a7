//! Sidebar filters: season and position selection over the base records.

use crate::models::PlayerSeasonRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Label meaning "no filter" for a season or position selector.
pub const ALL: &str = "Toutes";

fn is_unfiltered(label: &str) -> bool {
    let label = label.trim();
    label.is_empty() || label.eq_ignore_ascii_case(ALL) || label.eq_ignore_ascii_case("All")
}

/// Current season/position selection. `None` means every value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub season: Option<String>,
    pub position: Option<String>,
}

impl Selection {
    /// Build from selector labels; `"Toutes"`, `"All"` and empty select everything.
    pub fn from_labels(season: Option<&str>, position: Option<&str>) -> Self {
        let pick = |label: Option<&str>| {
            label
                .filter(|l| !is_unfiltered(l))
                .map(|l| l.trim().to_string())
        };
        Self {
            season: pick(season),
            position: pick(position),
        }
    }

    pub fn is_all_seasons(&self) -> bool {
        self.season.is_none()
    }

    pub fn matches(&self, record: &PlayerSeasonRecord) -> bool {
        self.season.as_ref().map_or(true, |s| *s == record.season)
            && self.position.as_ref().map_or(true, |p| *p == record.position)
    }
}

/// Rows matching `selection`, in base order. The base slice is never modified.
pub fn apply<'a>(
    records: &'a [PlayerSeasonRecord],
    selection: &Selection,
) -> Vec<&'a PlayerSeasonRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

fn options(values: impl Iterator<Item = String>) -> Vec<String> {
    let distinct: BTreeSet<String> = values.filter(|v| !v.is_empty()).collect();
    std::iter::once(ALL.to_string()).chain(distinct).collect()
}

/// `"Toutes"` followed by the sorted distinct seasons.
pub fn season_options(records: &[PlayerSeasonRecord]) -> Vec<String> {
    options(records.iter().map(|r| r.season.clone()))
}

/// `"Toutes"` followed by the sorted distinct positions.
pub fn position_options(records: &[PlayerSeasonRecord]) -> Vec<String> {
    options(records.iter().map(|r| r.position.clone()))
}
