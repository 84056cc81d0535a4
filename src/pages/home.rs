//! Home page - the daily check-in.
//!
//! Greeting, the "Météo du cerveau" mood picker, today's challenge, the
//! gauges and the focus mode card. Only the mood picker reacts to clicks.

use cerveau_core::content::{DAILY_CHALLENGE, FOCUS_SESSION, GAUGES, HOME_SUBTITLE};
use cerveau_core::{Mood, Page};
use cerveau_ui::{Button, ButtonVariant, MoodGrid, StatList, Widget};
use dioxus::prelude::*;

use crate::context::use_dashboard;

#[component]
pub fn Home() -> Element {
    let mut dashboard = use_dashboard();
    let selected = dashboard.read().mood();
    let (focus_title, focus_subtitle) = FOCUS_SESSION;

    let on_mood = move |mood: Mood| {
        dashboard.write().select_mood(mood);
    };

    rsx! {
        div { class: "page-content page-home",
            div { class: "page-header",
                h1 { "{Page::Home.heading()}" }
                p { class: "subtitle", "{HOME_SUBTITLE}" }
            }

            Widget { title: "Météo du cerveau", icon: "🧠",
                MoodGrid { selected: selected, on_select: on_mood }
            }

            Widget { title: "Défi du jour", icon: "🎯",
                div { class: "challenge-card",
                    p { class: "challenge-text", "{DAILY_CHALLENGE}" }
                    Button { "Commencer le défi" }
                }
            }

            Widget { title: "Tes statistiques", icon: "📊",
                StatList { gauges: GAUGES.to_vec() }
            }

            Widget { title: "Mode Focus", icon: "🎯",
                div { class: "focus-mode",
                    div { class: "focus-info",
                        p { class: "focus-title", "{focus_title}" }
                        p { class: "focus-subtitle", "{focus_subtitle}" }
                    }
                    Button { variant: ButtonVariant::Secondary, "Démarrer" }
                }
            }
        }
    }
}
