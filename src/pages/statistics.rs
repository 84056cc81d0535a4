//! Statistics page - overview placeholder until there is data to chart.

use cerveau_core::content::STATS_PLACEHOLDER;
use cerveau_core::Page;
use cerveau_ui::{EmptyState, Widget};
use dioxus::prelude::*;

#[component]
pub fn Statistics() -> Element {
    rsx! {
        div { class: "page-content page-stats",
            h1 { class: "page-title", "{Page::Stats.heading()}" }
            Widget { title: "Vue d'ensemble", icon: "📊",
                EmptyState { icon: "📊", message: STATS_PLACEHOLDER.to_string() }
            }
        }
    }
}
