//! Geographic layout data for the map panel.

pub mod hex;

pub use hex::{layout, HexLayout, HexTile};
