//! Dashboard configuration.

use super::records::Metric;

/// Rt estimates for U.S. states, published by the epiforecasts project.
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/epiforecasts/covid-rt-estimates/refs/heads/master/subnational/united-states/cases/summary/rt.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub source_url: String,
    /// Metric selected when the dashboard first mounts.
    pub metric: Metric,
    /// Cap on data rows read from the feed.
    pub row_limit: Option<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            metric: Metric::Median,
            row_limit: None,
        }
    }
}

impl DashboardConfig {
    /// Reads `RTWATCH_SOURCE_URL`, `RTWATCH_METRIC` and `RTWATCH_ROW_LIMIT`. Unset or
    /// unparseable values keep their defaults. Browsers have no environment, so wasm builds
    /// always use the defaults.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_lookup(|name| std::env::var(name).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(url) = lookup("RTWATCH_SOURCE_URL").filter(|v| !v.trim().is_empty()) {
            cfg.source_url = url.trim().to_string();
        }
        if let Some(metric) = lookup("RTWATCH_METRIC").and_then(|v| Metric::from_column(&v)) {
            cfg.metric = metric;
        }
        if let Some(limit) = lookup("RTWATCH_ROW_LIMIT").and_then(|v| v.trim().parse::<usize>().ok()) {
            cfg.row_limit = Some(limit).filter(|&n| n > 0);
        }

        cfg
    }
}
