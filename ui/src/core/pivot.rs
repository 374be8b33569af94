//! Long-to-wide reshape: one row per date, one column per state.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use tracing::debug;

use super::records::{DateKey, Metric, RawRecord, StateKey};

/// One date of the wide table. `values` holds a cell for every state in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalRow {
    pub date: DateKey,
    #[serde(flatten)]
    pub values: BTreeMap<StateKey, Option<f64>>,
}

impl TemporalRow {
    pub fn value(&self, state: &StateKey) -> Option<f64> {
        self.values.get(state).copied().flatten()
    }
}

/// Pivots `records` on `metric`.
///
/// Rows come out in chronological order and every row carries every state, with `None`
/// where the state has no observation for that date. When a `(date, state)` pair repeats,
/// the later record wins.
pub fn pivot(records: &[RawRecord], metric: Metric) -> Vec<TemporalRow> {
    let mut states: BTreeSet<&StateKey> = BTreeSet::new();
    let mut dates: BTreeSet<DateKey> = BTreeSet::new();
    let mut cells: HashMap<(DateKey, &StateKey), Option<f64>> =
        HashMap::with_capacity(records.len());

    for record in records {
        if record.state.as_str().is_empty() {
            debug!(date = %record.date_key(), "dropping record without state");
            continue;
        }
        let date = record.date_key();
        states.insert(&record.state);
        dates.insert(date);
        cells.insert((date, &record.state), record.value(metric));
    }

    dates
        .into_iter()
        .map(|date| {
            let values = states
                .iter()
                .map(|&state| {
                    let value = cells.get(&(date, state)).copied().flatten();
                    (state.clone(), value)
                })
                .collect();
            TemporalRow { date, values }
        })
        .collect()
}

/// Distinct states in ascending order.
pub fn distinct_states(records: &[RawRecord]) -> Vec<StateKey> {
    records
        .iter()
        .filter(|record| !record.state.as_str().is_empty())
        .map(|record| &record.state)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Flattens a wide table back to `(date, state, value)` triples. Empty cells are kept as
/// `None` so states and dates with no observations survive a re-pivot.
pub fn unpivot(rows: &[TemporalRow]) -> Vec<(DateKey, StateKey, Option<f64>)> {
    rows.iter()
        .flat_map(|row| {
            row.values
                .iter()
                .map(move |(state, value)| (row.date, state.clone(), *value))
        })
        .collect()
}
