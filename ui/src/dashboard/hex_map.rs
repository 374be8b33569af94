use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{format, Selection, Snapshot, StateKey};
use crate::dashboard::scale::fill_band;
use crate::geo;

#[derive(Clone, PartialEq)]
struct Tile {
    abbreviation: &'static str,
    enter_key: StateKey,
    exit_key: StateKey,
    points: String,
    label_x: f64,
    label_y: f64,
    class: String,
    title: String,
}

/// Hexagon map of the states, each tile banded by its mean value.
#[component]
pub fn HexMap(snapshot: Rc<Snapshot>, selection: Signal<Selection>) -> Element {
    let mut selection = selection;
    let current = selection();
    let layout = geo::layout();

    let tiles: Vec<Tile> = layout
        .tiles
        .iter()
        .map(|tile| {
            let value = snapshot.summary.get(&tile.state).and_then(|row| row.value);
            let active = current.is_selected(&tile.state);
            Tile {
                abbreviation: tile.abbreviation,
                enter_key: tile.state.clone(),
                exit_key: tile.state.clone(),
                points: tile.points.clone(),
                label_x: tile.label_x,
                label_y: tile.label_y,
                class: format!(
                    "dash-map__tile {}{}",
                    fill_band(value),
                    if active { " dash-map__tile--active" } else { "" }
                ),
                title: format!("{}: {}", tile.state, format::format_rt(value)),
            }
        })
        .collect();

    let view_box = layout.view_box();
    let unmapped = snapshot
        .temporal
        .states
        .iter()
        .filter(|state| layout.tile(state).is_none())
        .count();

    rsx! {
        section { class: "dash-card dash-map",
            div { class: "dash-card__header",
                h2 { "Map" }
                if unmapped > 0 {
                    span { class: "dash-card__meta", "{unmapped} regions not on the map" }
                }
            }

            svg {
                class: "dash-map__svg",
                view_box: "{view_box}",
                onmouseleave: move |_| selection.with_mut(|s| s.clear()),

                for tile in tiles.into_iter() {
                    g {
                        key: "{tile.abbreviation}",
                        onmouseenter: move |_| {
                            selection.with_mut(|s| s.hover_enter(tile.enter_key.clone()))
                        },
                        onmouseleave: move |_| selection.with_mut(|s| s.hover_exit(&tile.exit_key)),

                        polygon { class: "{tile.class}", points: "{tile.points}",
                            title { "{tile.title}" }
                        }
                        text {
                            class: "dash-map__label",
                            x: "{tile.label_x}",
                            y: "{tile.label_y}",
                            text_anchor: "middle",
                            dominant_baseline: "middle",
                            "{tile.abbreviation}"
                        }
                    }
                }
            }

            ul { class: "dash-map__legend",
                for (class, label) in LEGEND {
                    li { key: "{class}",
                        span { class: "dash-map__swatch {class}" }
                        "{label}"
                    }
                }
            }
        }
    }
}

const LEGEND: [(&str, &str); 6] = [
    ("rt-band--falling", "< 0.9"),
    ("rt-band--slowing", "0.9 to 1.0"),
    ("rt-band--steady", "1.0 to 1.1"),
    ("rt-band--growing", "1.1 to 1.3"),
    ("rt-band--surging", "> 1.3"),
    ("rt-band--none", "no data"),
];
