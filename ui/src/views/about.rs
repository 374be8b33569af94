use dioxus::prelude::*;

use crate::core::{config::DEFAULT_SOURCE_URL, DashboardConfig, Metric};

#[component]
pub fn About() -> Element {
    let config = use_context::<DashboardConfig>();
    let custom_source = config.source_url != DEFAULT_SOURCE_URL;
    let row_limit = config
        .row_limit
        .map(|limit| format!("first {limit} rows"))
        .unwrap_or_else(|| "all rows".to_string());

    rsx! {
        section { class: "page page-about",
            h1 { "About these estimates" }
            p {
                "Rt is the average number of people each infected person goes on to infect. "
                "Above 1 an outbreak is growing; below 1 it is shrinking."
            }

            h2 { "Data source" }
            p {
                "Estimates come from the epiforecasts covid-rt-estimates project, which publishes a daily "
                "summary per U.S. state with a median and 20%, 50% and 90% credible intervals."
            }
            dl { class: "page-about__facts",
                dt { "Feed" }
                dd { code { "{config.source_url}" } }
                if custom_source {
                    dd { class: "page-about__note", "Overridden with RTWATCH_SOURCE_URL." }
                }
                dt { "Rows read" }
                dd { "{row_limit}" }
            }

            h2 { "How the panels are built" }
            ul {
                li { "The feed is downloaded once per session; every panel reads the same copy." }
                li { "Rt over time pivots the feed into one row per date and one line per state. Gaps in the data stay gaps." }
                li { "Average by state and the map use the mean of each state's observations for the chosen metric." }
                li { "Hovering a state on the map focuses it in all panels at once." }
            }

            h2 { "Metrics" }
            ul {
                for metric in Metric::ALL {
                    li { key: "{metric.column()}",
                        code { "{metric.column()}" }
                        " {metric.label()}"
                    }
                }
            }
        }
    }
}
