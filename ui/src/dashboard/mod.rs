mod line_chart;
pub use line_chart::LineChart;

mod bar_chart;
pub use bar_chart::BarChart;

mod hex_map;
pub use hex_map::HexMap;

mod inspector;
pub use inspector::RowInspector;

mod readout;
pub use readout::FocusReadout;

pub mod scale;

use std::rc::Rc;

use crate::core::{IngestError, Metric, Snapshot};

/// What the dashboard panels render: a snapshot (possibly empty) and an optional error.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub snapshot: Rc<Snapshot>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn from_result(result: Result<Rc<Snapshot>, IngestError>, metric: Metric) -> Self {
        match result {
            Ok(snapshot) => Self {
                snapshot,
                error: None,
            },
            Err(err) => Self {
                snapshot: Rc::new(Snapshot::empty(metric)),
                error: Some(format!("Couldn't load Rt estimates: {err}")),
            },
        }
    }
}
