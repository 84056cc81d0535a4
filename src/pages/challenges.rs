//! Challenges page - list of cognitive exercises.

use cerveau_core::content::CHALLENGES;
use cerveau_core::Page;
use cerveau_ui::Widget;
use dioxus::prelude::*;

#[component]
pub fn Challenges() -> Element {
    rsx! {
        div { class: "page-content page-challenges",
            h1 { class: "page-title", "{Page::Challenges.heading()}" }
            Widget { title: "Exercices disponibles", icon: "🧠",
                div { class: "challenges-list",
                    for challenge in CHALLENGES {
                        div { key: "{challenge.title}", class: "challenge-item",
                            div { class: "challenge-info",
                                h4 { "{challenge.title}" }
                                p { "{challenge.description}" }
                            }
                            span {
                                class: "difficulty-badge {challenge.difficulty.class()}",
                                "{challenge.difficulty.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}
