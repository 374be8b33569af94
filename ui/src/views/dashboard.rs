use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::core::{
    format, ingest, DashboardConfig, IngestReport, Metric, Selection, Snapshot, SnapshotCache,
};
use crate::dashboard::{BarChart, DashboardState, FocusReadout, HexMap, LineChart, RowInspector};

#[component]
pub fn Dashboard() -> Element {
    let cache = use_context::<SnapshotCache>();
    let config = use_context::<DashboardConfig>();

    let mut metric = use_signal(|| config.metric);
    let selection = use_signal(Selection::default);

    let snapshot = use_resource(move || {
        let cache = cache.clone();
        let url = config.source_url.clone();
        let row_limit = config.row_limit;
        let metric = metric();
        async move {
            let result = cache
                .get_or_populate(metric, move || async move {
                    ingest::ingest(&url, row_limit).await
                })
                .await;
            match &result {
                Ok(snapshot) => info!(
                    ?metric,
                    dates = snapshot.temporal.rows.len(),
                    states = snapshot.temporal.states.len(),
                    "snapshot ready"
                ),
                Err(err) => error!(?metric, %err, "snapshot unavailable"),
            }
            result
        }
    });

    let on_metric = move |evt: FormEvent| {
        if let Some(next) = Metric::from_column(&evt.value()) {
            metric.set(next);
        }
    };

    let state = snapshot
        .read()
        .clone()
        .map(|result| DashboardState::from_result(result, metric()));

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dash__header",
                div {
                    h1 { "Rt by state" }
                    p { class: "dash__lede",
                        "Effective reproduction number estimates for U.S. states. Hover a state on the map to focus it across every panel."
                    }
                }
                label { class: "dash__metric",
                    span { "Metric" }
                    select {
                        value: "{metric().column()}",
                        oninput: on_metric,
                        for choice in Metric::ALL {
                            option { key: "{choice.column()}", value: "{choice.column()}", "{choice.label()}" }
                        }
                    }
                }
            }

            match state {
                None => rsx! {
                    p { class: "dash__status", "Loading Rt estimates…" }
                },
                Some(DashboardState { snapshot, error: Some(message) }) => rsx! {
                    div { class: "dash__error", role: "alert", "{message}" }
                    Panels { snapshot, selection }
                },
                Some(DashboardState { snapshot, error: None }) => rsx! {
                    ReportLine { report: snapshot.report.clone() }
                    Panels { snapshot, selection }
                },
            }
        }
    }
}

#[component]
fn Panels(snapshot: Rc<Snapshot>, selection: Signal<Selection>) -> Element {
    rsx! {
        div { class: "dash__grid",
            LineChart { snapshot: snapshot.clone(), selection }
            FocusReadout { snapshot: snapshot.clone(), selection }
            BarChart { snapshot: snapshot.clone(), selection }
            HexMap { snapshot: snapshot.clone(), selection }
        }
        RowInspector { snapshot }
    }
}

#[component]
fn ReportLine(report: IngestReport) -> Element {
    let rows = format::format_count(report.parsed_rows);
    let states = format::format_count(report.distinct_states);
    let dates = format::format_count(report.distinct_dates);

    rsx! {
        p { class: "dash__report",
            "{rows} rows across {states} states and {dates} dates"
            if report.skipped_rows > 0 {
                span { class: "dash__report-warning",
                    " ({report.skipped_rows} malformed rows skipped)"
                }
            }
            if report.truncated {
                span { class: "dash__report-warning", " (row limit reached)" }
            }
        }
    }
}
