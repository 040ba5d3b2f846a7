//! Aggregation helpers shared by the dashboard pages. Missing values never count as zero.

use crate::models::PlayerSeasonRecord;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Sum of the present values; missing values contribute nothing.
pub fn sum(values: impl IntoIterator<Item = Option<f64>>) -> f64 {
    values.into_iter().flatten().sum()
}

/// Mean of the present values, `None` when there are none.
pub fn mean(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let (total, count) = values
        .into_iter()
        .flatten()
        .fold((0.0, 0usize), |(t, c), v| (t + v, c + 1));
    (count > 0).then(|| total / count as f64)
}

/// `a / b`, missing when either is missing or `b` is zero.
pub fn ratio(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) if b != 0.0 => Some(a / b),
        _ => None,
    }
}

/// The `n` items with the largest key, largest first. Items without a key are
/// dropped; equal keys keep their input order.
pub fn top_n<T>(items: impl IntoIterator<Item = T>, n: usize, key: impl Fn(&T) -> Option<f64>) -> Vec<T> {
    ranked(items, n, key, |a, b| b.total_cmp(a))
}

/// The `n` items with the smallest key, smallest first. Same rules as `top_n`.
pub fn bottom_n<T>(items: impl IntoIterator<Item = T>, n: usize, key: impl Fn(&T) -> Option<f64>) -> Vec<T> {
    ranked(items, n, key, |a, b| a.total_cmp(b))
}

fn ranked<T>(
    items: impl IntoIterator<Item = T>,
    n: usize,
    key: impl Fn(&T) -> Option<f64>,
    order: impl Fn(&f64, &f64) -> Ordering,
) -> Vec<T> {
    let mut keyed: Vec<(f64, T)> = items
        .into_iter()
        .filter_map(|item| key(&item).map(|k| (k, item)))
        .collect();
    keyed.sort_by(|a, b| order(&a.0, &b.0));
    keyed.into_iter().take(n).map(|(_, item)| item).collect()
}

/// Rows grouped by a text key, keys sorted. Rows with an empty key are left out.
pub fn group_by<'a>(
    records: impl IntoIterator<Item = &'a PlayerSeasonRecord>,
    key: impl Fn(&PlayerSeasonRecord) -> &str,
) -> BTreeMap<String, Vec<&'a PlayerSeasonRecord>> {
    let mut groups: BTreeMap<String, Vec<&'a PlayerSeasonRecord>> = BTreeMap::new();
    for r in records {
        let k = key(r);
        if k.is_empty() {
            continue;
        }
        groups.entry(k.to_string()).or_default().push(r);
    }
    groups
}

/// First non-empty position among the rows.
pub fn first_position(rows: &[&PlayerSeasonRecord]) -> String {
    rows.iter()
        .map(|r| r.position.as_str())
        .find(|p| !p.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Pearson correlation over the pairs where both sides are present.
/// `None` with fewer than two pairs or when either side has no variance.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
