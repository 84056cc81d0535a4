//! Journal page - free-text reflection of the day.
//!
//! The text area is uncontrolled and "Enregistrer" is not wired to any
//! storage yet.

use cerveau_core::content::{JOURNAL_PROMPT, JOURNAL_ROWS};
use cerveau_core::Page;
use cerveau_ui::{Button, Widget};
use dioxus::prelude::*;

#[component]
pub fn Journal() -> Element {
    rsx! {
        div { class: "page-content page-journal",
            h1 { class: "page-title", "{Page::Journal.heading()}" }
            Widget { title: "Réflexion du jour", icon: "📖",
                textarea {
                    class: "journal-textarea",
                    rows: "{JOURNAL_ROWS}",
                    placeholder: JOURNAL_PROMPT,
                }
                Button { "Enregistrer" }
            }
        }
    }
}
