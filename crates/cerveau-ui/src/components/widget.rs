//! Widget Component
//!
//! The card every page is built from: an icon and a title in the header,
//! arbitrary content below.

use dioxus::prelude::*;

/// Card with a header (icon + title) and a content slot
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     Widget { title: "Défi du jour", icon: "🎯",
///         p { "Trouve 5 objets rouges" }
///     }
/// }
/// ```
#[component]
pub fn Widget(
    /// Header title
    title: String,
    /// Emoji shown before the title
    icon: String,
    /// Extra class on the outer card
    #[props(default = None)]
    class: Option<String>,
    children: Element,
) -> Element {
    let card_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("widget {}", extra),
        _ => "widget".to_string(),
    };

    rsx! {
        div { class: "{card_class}",
            div { class: "widget-header",
                span { class: "widget-icon", "{icon}" }
                h3 { "{title}" }
            }
            div { class: "widget-content",
                {children}
            }
        }
    }
}
