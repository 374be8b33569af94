//! Static hexagon tile layout of the U.S. states plus DC.
//!
//! Tiles sit on an "odd-r" offset grid (odd rows shifted half a tile right). Each tile is a
//! pointy-top unit hexagon: vertex `k` is at `(sin(k·60°), cos(k·60°))` around the centre.
//! The whole layout is translated so the smallest vertex coordinate is zero, and
//! coordinates are rounded to two decimals.

use once_cell::sync::Lazy;

use crate::core::records::StateKey;

const PRECISION: f64 = 100.0;

/// `(name, abbreviation, column, row)`
const GRID: &[(&str, &str, u8, u8)] = &[
    ("Alaska", "AK", 0, 0),
    ("Maine", "ME", 11, 0),
    ("Wisconsin", "WI", 6, 1),
    ("Vermont", "VT", 10, 1),
    ("New Hampshire", "NH", 11, 1),
    ("Washington", "WA", 1, 2),
    ("Idaho", "ID", 2, 2),
    ("Montana", "MT", 3, 2),
    ("North Dakota", "ND", 4, 2),
    ("Minnesota", "MN", 5, 2),
    ("Illinois", "IL", 6, 2),
    ("Michigan", "MI", 7, 2),
    ("New York", "NY", 9, 2),
    ("Massachusetts", "MA", 10, 2),
    ("Oregon", "OR", 1, 3),
    ("Nevada", "NV", 2, 3),
    ("Wyoming", "WY", 3, 3),
    ("South Dakota", "SD", 4, 3),
    ("Iowa", "IA", 5, 3),
    ("Indiana", "IN", 6, 3),
    ("Ohio", "OH", 7, 3),
    ("Pennsylvania", "PA", 8, 3),
    ("New Jersey", "NJ", 9, 3),
    ("Connecticut", "CT", 10, 3),
    ("Rhode Island", "RI", 11, 3),
    ("California", "CA", 1, 4),
    ("Utah", "UT", 2, 4),
    ("Colorado", "CO", 3, 4),
    ("Nebraska", "NE", 4, 4),
    ("Missouri", "MO", 5, 4),
    ("Kentucky", "KY", 6, 4),
    ("West Virginia", "WV", 7, 4),
    ("Virginia", "VA", 8, 4),
    ("Maryland", "MD", 9, 4),
    ("Delaware", "DE", 10, 4),
    ("Arizona", "AZ", 2, 5),
    ("New Mexico", "NM", 3, 5),
    ("Kansas", "KS", 4, 5),
    ("Arkansas", "AR", 5, 5),
    ("Tennessee", "TN", 6, 5),
    ("North Carolina", "NC", 7, 5),
    ("South Carolina", "SC", 8, 5),
    ("District of Columbia", "DC", 9, 5),
    ("Oklahoma", "OK", 4, 6),
    ("Louisiana", "LA", 5, 6),
    ("Mississippi", "MS", 6, 6),
    ("Alabama", "AL", 7, 6),
    ("Georgia", "GA", 8, 6),
    ("Hawaii", "HI", 0, 7),
    ("Texas", "TX", 4, 7),
    ("Florida", "FL", 9, 7),
];

#[derive(Debug, Clone, PartialEq)]
pub struct HexTile {
    pub state: StateKey,
    pub abbreviation: &'static str,
    /// SVG `points` attribute: six `x,y` pairs separated by spaces.
    pub points: String,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HexLayout {
    pub tiles: Vec<HexTile>,
    pub width: f64,
    pub height: f64,
}

impl HexLayout {
    pub fn tile(&self, state: &StateKey) -> Option<&HexTile> {
        self.tiles.iter().find(|tile| &tile.state == state)
    }

    /// SVG `viewBox` covering every tile.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

static LAYOUT: Lazy<HexLayout> = Lazy::new(build_layout);

pub fn layout() -> &'static HexLayout {
    &LAYOUT
}

/// Abbreviation for `state`, if it is one of the laid-out tiles.
pub fn abbreviation(state: &StateKey) -> Option<&'static str> {
    GRID.iter()
        .find(|(name, ..)| *name == state.as_str())
        .map(|(_, abbr, ..)| *abbr)
}

fn centre(column: u8, row: u8) -> (f64, f64) {
    let sqrt3 = 3f64.sqrt();
    let shift = if row % 2 == 1 { 0.5 } else { 0.0 };
    (sqrt3 * (f64::from(column) + shift), 1.5 * f64::from(row))
}

fn vertices(cx: f64, cy: f64) -> [(f64, f64); 6] {
    let mut out = [(0.0, 0.0); 6];
    for (k, vertex) in out.iter_mut().enumerate() {
        let angle = std::f64::consts::TAU * k as f64 / 6.0;
        *vertex = (cx + angle.sin(), cy + angle.cos());
    }
    out
}

fn round(value: f64) -> f64 {
    // `+ 0.0` folds negative zero.
    (value * PRECISION).round() / PRECISION + 0.0
}

fn build_layout() -> HexLayout {
    let raw: Vec<_> = GRID
        .iter()
        .map(|&(name, abbr, column, row)| {
            let (cx, cy) = centre(column, row);
            (name, abbr, (cx, cy), vertices(cx, cy))
        })
        .collect();

    let all_points = raw.iter().flat_map(|(.., points)| points.iter());
    let (min_x, min_y, max_x, max_y) = all_points.fold(
        (f64::MAX, f64::MAX, f64::MIN, f64::MIN),
        |(lx, ly, hx, hy), &(x, y)| (lx.min(x), ly.min(y), hx.max(x), hy.max(y)),
    );

    let tiles = raw
        .into_iter()
        .filter_map(|(name, abbr, (cx, cy), points)| {
            let state = StateKey::parse(name)?;
            let points = points
                .iter()
                .map(|&(x, y)| format!("{},{}", round(x - min_x), round(y - min_y)))
                .collect::<Vec<_>>()
                .join(" ");
            Some(HexTile {
                state,
                abbreviation: abbr,
                points,
                label_x: round(cx - min_x),
                label_y: round(cy - min_y),
            })
        })
        .collect();

    HexLayout {
        tiles,
        width: round(max_x - min_x),
        height: round(max_y - min_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn covers_fifty_states_and_dc() {
        let layout = layout();
        assert_eq!(layout.tiles.len(), 51);

        let names: HashSet<_> = layout.tiles.iter().map(|t| t.state.clone()).collect();
        let abbrs: HashSet<_> = layout.tiles.iter().map(|t| t.abbreviation).collect();
        assert_eq!(names.len(), 51);
        assert_eq!(abbrs.len(), 51);
    }

    #[test]
    fn grid_cells_are_unique() {
        let cells: HashSet<_> = GRID.iter().map(|&(_, _, c, r)| (c, r)).collect();
        assert_eq!(cells.len(), GRID.len());
    }

    #[test]
    fn polygons_have_six_non_negative_vertices() {
        let layout = layout();
        for tile in &layout.tiles {
            let pairs: Vec<&str> = tile.points.split(' ').collect();
            assert_eq!(pairs.len(), 6, "{}", tile.abbreviation);
            for pair in pairs {
                let (x, y) = pair.split_once(',').unwrap();
                let x: f64 = x.parse().unwrap();
                let y: f64 = y.parse().unwrap();
                assert!(x >= 0.0 && x <= layout.width, "{} x={x}", tile.abbreviation);
                assert!(y >= 0.0 && y <= layout.height, "{} y={y}", tile.abbreviation);
            }
        }
    }

    #[test]
    fn first_vertex_points_down_from_centre() {
        let tile = layout()
            .tile(&StateKey::parse("Alaska").unwrap())
            .unwrap();
        let first = tile.points.split(' ').next().unwrap();
        let (x, y) = first.split_once(',').unwrap();
        assert_eq!(x.parse::<f64>().unwrap(), tile.label_x);
        assert!((y.parse::<f64>().unwrap() - (tile.label_y + 1.0)).abs() < 0.011);
    }

    #[test]
    fn abbreviation_lookup() {
        assert_eq!(abbreviation(&StateKey::parse("Colorado").unwrap()), Some("CO"));
        assert_eq!(abbreviation(&StateKey::parse("Guam").unwrap()), None);
    }
}
