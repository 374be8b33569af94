use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use crate::core::Snapshot;

const PREVIEW_ROWS: usize = 5;

/// Collapsible view of the first wide rows, as the charts receive them.
#[component]
pub fn RowInspector(snapshot: Rc<Snapshot>) -> Element {
    let total = snapshot.temporal.rows.len();
    let shown = total.min(PREVIEW_ROWS);
    let body = preview_json(&snapshot, PREVIEW_ROWS);

    rsx! {
        details { class: "dash-card dash-inspector",
            summary { class: "dash-inspector__summary", "Raw rows ({shown} of {total})" }
            pre { class: "dash-inspector__body", "{body}" }
        }
    }
}

/// Pretty JSON of the first `limit` temporal rows.
pub fn preview_json(snapshot: &Snapshot, limit: usize) -> String {
    let rows = &snapshot.temporal.rows[..snapshot.temporal.rows.len().min(limit)];
    serde_json::to_string_pretty(rows).unwrap_or_else(|err| {
        warn!("failed to serialize row preview: {err}");
        String::from("[]")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingest::parse_csv;
    use crate::core::Metric;

    #[test]
    fn preview_is_flat_and_limited() {
        let csv = "date,state,median\n2021-01-01,AL,1.2\n2021-01-02,AL,1.1\n2021-01-03,CO,0.9\n";
        let snapshot = Snapshot::build(&parse_csv(csv, None).unwrap(), Metric::Median);

        let json: serde_json::Value = serde_json::from_str(&preview_json(&snapshot, 2)).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["date"], "2021-01-01");
        assert_eq!(rows[0]["AL"], 1.2);
        assert!(rows[0]["CO"].is_null());
    }

    #[test]
    fn empty_snapshot_previews_empty_array() {
        assert_eq!(preview_json(&Snapshot::empty(Metric::Median), 5), "[]");
    }
}
