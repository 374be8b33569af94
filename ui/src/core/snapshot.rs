//! The reshaped bundle the charts and the map read from.

use serde::Serialize;

use super::ingest::{IngestReport, Ingested};
use super::pivot::{distinct_states, pivot, TemporalRow};
use super::records::{Metric, StateKey};
use super::selection::Selection;
use super::series::{build_series, SeriesDescriptor};
use super::summary::{summarize, SummaryRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalDataset {
    pub states: Vec<StateKey>,
    pub rows: Vec<TemporalRow>,
    /// Descriptors with no selection applied.
    pub series: Vec<SeriesDescriptor>,
}

impl TemporalDataset {
    /// Series descriptors with `selection` applied.
    pub fn series_for(&self, selection: &Selection) -> Vec<SeriesDescriptor> {
        build_series(&self.states, selection)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryDataset {
    pub rows: Vec<SummaryRow>,
}

impl SummaryDataset {
    pub fn get(&self, state: &StateKey) -> Option<&SummaryRow> {
        self.rows
            .binary_search_by(|row| row.state.cmp(state))
            .ok()
            .map(|idx| &self.rows[idx])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub metric: Metric,
    pub temporal: TemporalDataset,
    pub summary: SummaryDataset,
    pub report: IngestReport,
}

impl Snapshot {
    pub fn build(ingested: &Ingested, metric: Metric) -> Self {
        let states = distinct_states(&ingested.records);
        let rows = pivot(&ingested.records, metric);
        let series = build_series(&states, &Selection::Idle);
        let summary = summarize(&ingested.records, metric);

        Self {
            metric,
            temporal: TemporalDataset {
                states,
                rows,
                series,
            },
            summary: SummaryDataset { rows: summary },
            report: ingested.report.clone(),
        }
    }

    /// Snapshot with no rows, rendered alongside an ingestion error.
    pub fn empty(metric: Metric) -> Self {
        Self {
            metric,
            temporal: TemporalDataset {
                states: Vec::new(),
                rows: Vec::new(),
                series: Vec::new(),
            },
            summary: SummaryDataset { rows: Vec::new() },
            report: IngestReport::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.temporal.rows.is_empty()
    }
}
