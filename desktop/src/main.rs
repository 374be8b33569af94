#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::{DashboardConfig, SnapshotCache};
use ui::views::{About, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/about")]
    About {},
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Rt Watch – v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1280.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus_logger::init(level) {
        eprintln!("logger already initialized: {err}");
    }
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

#[component]
fn App() -> Element {
    // One cache per process; every view shares the ingested feed through it.
    use_context_provider(SnapshotCache::new);
    use_context_provider(DashboardConfig::from_env);

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        about: nav_about,
    });

    rsx! {
        // Desktop builds have no asset server, so the theme is always inlined.
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> { }
    }
}

/// A desktop-specific layout around the shared `AppNavbar`, so the navbar can link to the
/// desktop `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
