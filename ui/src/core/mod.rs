//! Data pipeline for the dashboard: ingest, reshape, cache, and the shared hover selection.

pub mod cache;
pub mod config;
pub mod format;
pub mod ingest;
pub mod pivot;
pub mod records;
pub mod selection;
pub mod series;
pub mod snapshot;
pub mod summary;

pub use cache::SnapshotCache;
pub use config::DashboardConfig;
pub use ingest::{IngestError, IngestReport, Ingested};
pub use records::{DateKey, Metric, RawRecord, StateKey};
pub use selection::Selection;
pub use series::SeriesDescriptor;
pub use snapshot::Snapshot;
