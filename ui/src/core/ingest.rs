//! Ingestion boundary: fetch the Rt feed and tokenize it into [`RawRecord`]s.
//!
//! Whole-document problems (transport, HTTP status, missing headers, unreadable CSV, no
//! usable rows) surface as an [`IngestError`]. A single malformed row is skipped with a
//! warning and counted in the [`IngestReport`], so one bad line never blocks the rest.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::records::{parse_date, Field, RawRecord, StateKey};

pub const DATE_COLUMN: &str = super::records::RESERVED_STATE;
pub const STATE_COLUMN: &str = "state";
pub const MEDIAN_COLUMN: &str = "median";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("network request failed: {0}")]
    Fetch(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("could not parse CSV: {0}")]
    Parse(String),
    #[error("the feed contained no usable rows")]
    EmptyDataset,
}

/// Counters describing one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    pub parsed_rows: usize,
    pub skipped_rows: usize,
    pub distinct_states: usize,
    pub distinct_dates: usize,
    pub truncated: bool,
}

/// Parsed rows plus the report that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingested {
    pub records: Vec<RawRecord>,
    pub report: IngestReport,
}

/// Tokenizes CSV text into records. `row_limit` caps the number of data rows read.
pub fn parse_csv(text: &str, row_limit: Option<usize>) -> Result<Ingested, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|err| IngestError::Parse(err.to_string()))?
        .iter()
        .map(|h| h.trim().trim_matches('"').to_string())
        .collect();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IngestError::Parse(format!("missing required column `{name}`")))
    };
    let date_idx = column(DATE_COLUMN)?;
    let state_idx = column(STATE_COLUMN)?;
    let median_idx = column(MEDIAN_COLUMN)?;

    let mut records = Vec::new();
    let mut report = IngestReport::default();
    let mut states = BTreeSet::new();
    let mut dates = BTreeSet::new();

    for (index, row) in reader.records().enumerate() {
        if row_limit.is_some_and(|limit| records.len() >= limit) {
            report.truncated = true;
            break;
        }

        // Header is line 1.
        let line = index + 2;
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(line, error = %err, "skipping unreadable row");
                report.skipped_rows += 1;
                continue;
            }
        };

        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let Some(date) = parse_date(cell(date_idx)) else {
            warn!(line, value = cell(date_idx), "skipping row with unparseable date");
            report.skipped_rows += 1;
            continue;
        };
        let Some(state) = StateKey::parse(cell(state_idx)) else {
            warn!(line, "skipping row without a usable state identifier");
            report.skipped_rows += 1;
            continue;
        };
        let median = match Field::from_cell(cell(median_idx)) {
            Field::Number(value) => Some(value),
            Field::Missing => None,
            Field::Text(text) => {
                warn!(line, value = %text, "non-numeric median treated as missing");
                None
            }
        };

        let extra: BTreeMap<String, Field> = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| ![date_idx, state_idx, median_idx].contains(idx))
            .map(|(idx, name)| (name.clone(), Field::from_cell(cell(idx))))
            .collect();

        states.insert(state.clone());
        dates.insert(date);
        records.push(RawRecord {
            date,
            state,
            median,
            extra,
        });
    }

    report.parsed_rows = records.len();
    report.distinct_states = states.len();
    report.distinct_dates = dates.len();

    if records.is_empty() {
        return Err(IngestError::EmptyDataset);
    }

    Ok(Ingested { records, report })
}

/// Downloads the feed body as text.
pub async fn fetch_csv(url: &str) -> Result<String, IngestError> {
    let response = reqwest::get(url)
        .await
        .map_err(|err| IngestError::Fetch(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status(status.as_u16()));
    }

    response
        .text()
        .await
        .map_err(|err| IngestError::Fetch(err.to_string()))
}

/// Fetches and parses the feed in one step.
pub async fn ingest(url: &str, row_limit: Option<usize>) -> Result<Ingested, IngestError> {
    info!(url, "fetching Rt feed");
    let text = fetch_csv(url).await?;
    let ingested = parse_csv(&text, row_limit)?;
    info!(
        rows = ingested.report.parsed_rows,
        skipped = ingested.report.skipped_rows,
        states = ingested.report.distinct_states,
        dates = ingested.report.distinct_dates,
        "Rt feed ingested"
    );
    Ok(ingested)
}
