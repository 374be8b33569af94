use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{format, Selection, Snapshot, StateKey};
use crate::geo::hex::abbreviation;

/// Values shown next to the charts for the focused state.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    pub title: String,
    pub mean: String,
    pub latest: String,
    pub latest_date: Option<String>,
    pub observations: usize,
}

impl Readout {
    pub fn for_state(snapshot: &Snapshot, state: &StateKey) -> Self {
        let summary = snapshot.summary.get(state);
        let latest = snapshot
            .temporal
            .rows
            .iter()
            .rev()
            .find_map(|row| row.value(state).map(|value| (row.date, value)));

        let title = match abbreviation(state) {
            Some(abbr) => format!("{state} ({abbr})"),
            None => state.to_string(),
        };

        Self {
            title,
            mean: format::format_rt(summary.and_then(|row| row.value)),
            latest: format::format_rt(latest.map(|(_, value)| value)),
            latest_date: latest.map(|(date, _)| format::format_long_date(date.date())),
            observations: summary.map(|row| row.observations).unwrap_or(0),
        }
    }
}

/// Shown while nothing is focused. Only the map writes the selection.
const IDLE_HINT: &str = "Hover a map tile to focus a state.";

#[component]
pub fn FocusReadout(snapshot: Rc<Snapshot>, selection: ReadOnlySignal<Selection>) -> Element {
    let current = selection();
    let Some(state) = current.selected() else {
        return rsx! {
            aside { class: "dash-readout dash-readout--idle",
                p { "{IDLE_HINT}" }
            }
        };
    };

    let readout = Readout::for_state(&snapshot, state);
    let metric = snapshot.metric.label();

    rsx! {
        aside { class: "dash-readout",
            h3 { class: "dash-readout__title", "{readout.title}" }
            dl { class: "dash-readout__list",
                dt { "Mean {metric}" }
                dd { "{readout.mean}" }
                dt { "Latest" }
                dd {
                    "{readout.latest}"
                    if let Some(date) = readout.latest_date.as_ref() {
                        span { class: "dash-readout__date", " on {date}" }
                    }
                }
                dt { "Observations" }
                dd { "{readout.observations}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ingest::parse_csv;
    use crate::core::Metric;

    #[test]
    fn readout_uses_latest_observed_value() {
        let csv = "\
date,state,median
2021-03-01,Colorado,1.2
2021-03-02,Colorado,0.8
2021-03-03,Colorado,
2021-03-03,Alabama,1.0
";
        let snapshot = Snapshot::build(&parse_csv(csv, None).unwrap(), Metric::Median);
        let readout = Readout::for_state(&snapshot, &StateKey::parse("Colorado").unwrap());

        assert_eq!(readout.title, "Colorado (CO)");
        assert_eq!(readout.mean, "1.00");
        assert_eq!(readout.latest, "0.80");
        assert_eq!(readout.latest_date.as_deref(), Some("2 Mar 2021"));
        assert_eq!(readout.observations, 2);
    }

    #[test]
    fn unknown_state_reads_as_missing() {
        let snapshot = Snapshot::empty(Metric::Median);
        let readout = Readout::for_state(&snapshot, &StateKey::parse("Guam").unwrap());
        assert_eq!(readout.title, "Guam");
        assert_eq!(readout.mean, "n/a");
        assert_eq!(readout.latest_date, None);
        assert_eq!(readout.observations, 0);
    }

    #[test]
    fn idle_hint_points_at_the_map() {
        assert!(IDLE_HINT.contains("map"));
        assert!(!IDLE_HINT.contains("line") && !IDLE_HINT.contains("bar"));
    }
}
