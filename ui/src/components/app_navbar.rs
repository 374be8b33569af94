use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platform crates own the `Route` enum, so they register `Link` constructors here and
/// `AppNavbar` renders them with its own labels.
///
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///     about: |label| rsx!( Link { class: "navbar__link", to: Route::About {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins; later calls (re-renders of the root) are ignored.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let links = NAV_BUILDER.get().map(|b| {
        let dashboard = (b.dashboard)("Dashboard");
        let about = (b.about)("About");
        rsx! {
            nav { class: "navbar__links",
                {dashboard}
                {about}
            }
        }
    });

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Rt Watch" }
                    }
                    span { class: "navbar__brand-subtitle", "How fast is it spreading?" }
                }

                if let Some(links) = links {
                    {links}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
