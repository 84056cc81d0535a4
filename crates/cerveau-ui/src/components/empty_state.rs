//! Empty State Component
//!
//! Centered icon and message for sections with nothing to show yet.

use dioxus::prelude::*;

#[component]
pub fn EmptyState(icon: String, message: String) -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-icon", "{icon}" }
            p { "{message}" }
        }
    }
}
