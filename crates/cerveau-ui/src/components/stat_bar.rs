//! Stat Bar Component
//!
//! A gauge row: label and percentage on top, progress bar underneath.

use cerveau_core::Gauge;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct StatBarProps {
    pub gauge: Gauge,
}

#[component]
pub fn StatBar(props: StatBarProps) -> Element {
    let gauge = props.gauge;
    let percent = gauge.percent();

    rsx! {
        div { class: "stat-item",
            div { class: "stat-header",
                span { class: "stat-label", "{gauge.label}" }
                span { class: "stat-value", "{percent}%" }
            }
            div { class: "progress-bar",
                role: "progressbar",
                "aria-valuenow": "{percent}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                div {
                    class: "progress-fill {gauge.color_class}",
                    style: "width: {percent}%",
                }
            }
        }
    }
}

/// Stack of gauges, as shown in the "Tes statistiques" widget
#[component]
pub fn StatList(gauges: Vec<Gauge>) -> Element {
    rsx! {
        div { class: "stats-list",
            for gauge in gauges {
                StatBar { key: "{gauge.label}", gauge: gauge }
            }
        }
    }
}
