use dioxus_logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::{DashboardConfig, SnapshotCache};
use ui::views::{About, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/about")]
    About {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("logger already initialized: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SnapshotCache::new);
    use_context_provider(DashboardConfig::from_env);
    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        about: nav_about,
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar`, so the navbar can link to the
/// web `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
