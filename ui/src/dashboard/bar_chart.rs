use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{format, summary::value_range, Selection, Snapshot};
use crate::dashboard::scale::{fill_band, LinearScale};

const WIDTH: f64 = 360.0;
const ROW_HEIGHT: f64 = 16.0;
const LABEL_WIDTH: f64 = 128.0;
const VALUE_WIDTH: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
struct Bar {
    label: String,
    bar_y: f64,
    text_y: f64,
    width: f64,
    value_x: f64,
    class: String,
    value_label: String,
}

/// Mean of the metric per state. States without observations keep their row but show no bar.
#[component]
pub fn BarChart(snapshot: Rc<Snapshot>, selection: ReadOnlySignal<Selection>) -> Element {
    let rows = &snapshot.summary.rows;

    if rows.is_empty() {
        return rsx! {
            section { class: "dash-card dash-bars",
                div { class: "dash-card__header", h2 { "Average by state" } }
                p { class: "dash-card__placeholder", "No states to summarize yet." }
            }
        };
    }

    let bars = bars(&snapshot, &selection());
    let height = ROW_HEIGHT * rows.len() as f64;
    let bar_height = ROW_HEIGHT - 4.0;
    let label_x = LABEL_WIDTH - 6.0;
    let threshold_x = x_scale(&snapshot).map(1.0);
    let meta = format!("mean {}", snapshot.metric.label().to_lowercase());

    rsx! {
        section { class: "dash-card dash-bars",
            div { class: "dash-card__header",
                h2 { "Average by state" }
                span { class: "dash-card__meta", "{meta}" }
            }

            svg {
                class: "dash-bars__svg",
                view_box: "0 0 {WIDTH} {height}",

                for bar in bars.into_iter() {
                    g { key: "{bar.label}", class: "dash-bars__row",
                        text {
                            class: "dash-bars__label",
                            x: "{label_x}",
                            y: "{bar.text_y}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{bar.label}"
                        }
                        rect {
                            class: "{bar.class}",
                            x: "{LABEL_WIDTH}",
                            y: "{bar.bar_y}",
                            width: "{bar.width}",
                            height: "{bar_height}",
                        }
                        text {
                            class: "dash-bars__value",
                            x: "{bar.value_x}",
                            y: "{bar.text_y}",
                            dominant_baseline: "middle",
                            "{bar.value_label}"
                        }
                    }
                }

                line {
                    class: "dash-line__threshold",
                    x1: "{threshold_x}",
                    x2: "{threshold_x}",
                    y1: "0",
                    y2: "{height}",
                }
            }
        }
    }
}

fn x_scale(snapshot: &Snapshot) -> LinearScale {
    let max = value_range(&snapshot.summary.rows)
        .map(|(_, hi)| hi.max(1.0))
        .unwrap_or(1.0);
    LinearScale::new((0.0, max), (LABEL_WIDTH, WIDTH - VALUE_WIDTH))
}

fn bars(snapshot: &Snapshot, selection: &Selection) -> Vec<Bar> {
    let x = x_scale(snapshot);
    snapshot
        .summary
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let top = idx as f64 * ROW_HEIGHT;
            let width = row
                .value
                .filter(|v| v.is_finite())
                .map(|v| (x.map(v) - LABEL_WIDTH).max(0.0))
                .unwrap_or(0.0);
            let active = selection.is_selected(&row.state);
            Bar {
                label: row.state.to_string(),
                bar_y: top + 2.0,
                text_y: top + ROW_HEIGHT / 2.0,
                width,
                value_x: LABEL_WIDTH + width + 4.0,
                class: format!(
                    "dash-bars__bar {}{}",
                    fill_band(row.value),
                    if active { " dash-bars__bar--active" } else { "" }
                ),
                value_label: format::format_rt(row.value),
            }
        })
        .collect()
}
