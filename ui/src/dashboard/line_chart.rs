use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{format, series::highlighted, Selection, Snapshot};
use crate::dashboard::scale::{date_domain, line_segments, ticks, value_domain, LinearScale};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 12.0;
const MARGIN_TOP: f64 = 12.0;
const MARGIN_BOTTOM: f64 = 28.0;

#[derive(Clone, PartialEq)]
struct LineEntry {
    key: String,
    class: &'static str,
    segments: Vec<String>,
}

#[derive(Clone, PartialEq)]
struct Tick {
    pos: f64,
    label: String,
}

#[component]
pub fn LineChart(snapshot: Rc<Snapshot>, selection: ReadOnlySignal<Selection>) -> Element {
    let current = selection();
    let temporal = &snapshot.temporal;

    let Some(date_range) = date_domain(&temporal.rows) else {
        return rsx! {
            section { class: "dash-card dash-line",
                div { class: "dash-card__header", h2 { "Rt over time" } }
                p { class: "dash-card__placeholder", "No estimates to plot yet." }
            }
        };
    };

    let x = LinearScale::new(date_range, (MARGIN_LEFT, WIDTH - MARGIN_RIGHT));
    let y_domain = value_domain(&temporal.rows);
    let y = LinearScale::new(y_domain, (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP));

    let series = temporal.series_for(&current);
    let focus = highlighted(&series).cloned();
    let dim_others = focus.is_some();

    // Highlighted series last so it paints on top.
    let mut ordered: Vec<_> = series.iter().filter(|s| !s.highlighted).collect();
    ordered.extend(focus.iter());

    let lines: Vec<LineEntry> = ordered
        .into_iter()
        .map(|descriptor| LineEntry {
            key: descriptor.key.to_string(),
            class: if descriptor.highlighted {
                "dash-line__series dash-line__series--active"
            } else if dim_others {
                "dash-line__series dash-line__series--muted"
            } else {
                "dash-line__series"
            },
            segments: line_segments(&temporal.rows, &descriptor.key, &x, &y),
        })
        .collect();

    let y_ticks: Vec<Tick> = ticks(y_domain, 5)
        .into_iter()
        .map(|value| Tick {
            pos: y.map(value),
            label: format!("{value:.1}"),
        })
        .collect();

    let x_ticks: Vec<Tick> = month_starts(&snapshot)
        .into_iter()
        .map(|date| Tick {
            pos: x.map(f64::from(date.to_julian_day())),
            label: format::format_axis_date(date),
        })
        .collect();

    let threshold_y = y.map(1.0);
    let plot_right = WIDTH - MARGIN_RIGHT;
    let axis_y = HEIGHT - MARGIN_BOTTOM;
    let label_y = HEIGHT - 8.0;
    let tick_x = MARGIN_LEFT - 6.0;
    let aria = format!("{} by state over time", snapshot.metric.label());
    let meta = match &focus {
        Some(descriptor) => descriptor.label.clone(),
        None => format!("{} states", temporal.states.len()),
    };

    rsx! {
        section { class: "dash-card dash-line",
            div { class: "dash-card__header",
                h2 { "Rt over time" }
                span { class: "dash-card__meta", "{meta}" }
            }

            svg {
                class: "dash-line__svg",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                role: "img",
                "aria-label": "{aria}",

                for tick in y_ticks.into_iter() {
                    g { key: "y-{tick.label}",
                        line {
                            class: "dash-line__grid",
                            x1: "{MARGIN_LEFT}",
                            x2: "{plot_right}",
                            y1: "{tick.pos}",
                            y2: "{tick.pos}",
                        }
                        text {
                            class: "dash-line__tick",
                            x: "{tick_x}",
                            y: "{tick.pos}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{tick.label}"
                        }
                    }
                }

                for tick in x_ticks.into_iter() {
                    text {
                        key: "x-{tick.label}",
                        class: "dash-line__tick",
                        x: "{tick.pos}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        "{tick.label}"
                    }
                }

                line {
                    class: "dash-line__axis",
                    x1: "{MARGIN_LEFT}",
                    x2: "{plot_right}",
                    y1: "{axis_y}",
                    y2: "{axis_y}",
                }
                line {
                    class: "dash-line__threshold",
                    x1: "{MARGIN_LEFT}",
                    x2: "{plot_right}",
                    y1: "{threshold_y}",
                    y2: "{threshold_y}",
                }

                for entry in lines.into_iter() {
                    g { key: "{entry.key}", class: "{entry.class}",
                        for (idx, points) in entry.segments.iter().enumerate() {
                            polyline { key: "{idx}", points: "{points}" }
                        }
                    }
                }
            }
        }
    }
}

/// First day of each month in the plotted range, thinned to at most eight labels.
fn month_starts(snapshot: &Snapshot) -> Vec<time::Date> {
    let rows = &snapshot.temporal.rows;
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return Vec::new();
    };
    let (first, last) = (first.date.date(), last.date.date());

    let mut starts = Vec::new();
    let mut cursor = first.replace_day(1).ok();
    while let Some(date) = cursor {
        if date > last {
            break;
        }
        if date >= first {
            starts.push(date);
        }
        cursor = next_month(date);
    }

    let stride = starts.len().div_ceil(8).max(1);
    starts.into_iter().step_by(stride).collect()
}

fn next_month(date: time::Date) -> Option<time::Date> {
    let (year, month) = match date.month() {
        time::Month::December => (date.year() + 1, time::Month::January),
        month => (date.year(), month.next()),
    };
    time::Date::from_calendar_date(year, month, 1).ok()
}
