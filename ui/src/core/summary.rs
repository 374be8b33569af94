//! Per-state mean of a metric.

use std::collections::BTreeMap;

use serde::Serialize;

use super::records::{Metric, RawRecord, StateKey};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub state: StateKey,
    /// Mean over the non-null observations; `None` when there were none.
    pub value: Option<f64>,
    pub observations: usize,
}

/// One row per distinct state, ascending by state.
pub fn summarize(records: &[RawRecord], metric: Metric) -> Vec<SummaryRow> {
    let mut totals: BTreeMap<&StateKey, (f64, usize)> = BTreeMap::new();

    for record in records {
        if record.state.as_str().is_empty() {
            continue;
        }
        let entry = totals.entry(&record.state).or_insert((0.0, 0));
        if let Some(value) = record.value(metric).filter(|v| v.is_finite()) {
            entry.0 += value;
            entry.1 += 1;
        }
    }

    totals
        .into_iter()
        .map(|(state, (sum, count))| SummaryRow {
            state: state.clone(),
            value: mean(sum, count),
            observations: count,
        })
        .collect()
}

fn mean(sum: f64, count: usize) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Smallest and largest defined summary value.
pub fn value_range(rows: &[SummaryRow]) -> Option<(f64, f64)> {
    rows.iter()
        .filter_map(|row| row.value)
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        })
}
