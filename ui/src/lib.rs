//! Shared UI crate for Rt Watch. The data pipeline, the dashboard panels and the views
//! live here; the `web` and `desktop` crates only add routing and launch.

pub mod core;
pub mod dashboard;
pub mod geo;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme, embedded so every platform can inline it without an asset pipeline.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));
