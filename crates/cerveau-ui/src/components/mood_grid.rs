//! Mood Grid Component
//!
//! Four emoji buttons, one per mood. The selected one carries `active`.

use cerveau_core::Mood;
use dioxus::prelude::*;

/// Class attribute of a mood button
pub fn mood_button_class(mood: Mood, selected: Option<Mood>) -> String {
    if selected == Some(mood) {
        format!("mood-btn {} active", mood.color_class())
    } else {
        format!("mood-btn {}", mood.color_class())
    }
}

/// Properties for the MoodGrid component
#[derive(Clone, PartialEq, Props)]
pub struct MoodGridProps {
    /// Currently highlighted mood, if any
    pub selected: Option<Mood>,
    /// Handler called with the clicked mood
    pub on_select: EventHandler<Mood>,
}

/// Displays the four mood buttons in a 2x2 grid
///
/// # Example
///
/// ```rust,ignore
/// let mut mood = use_signal(|| None);
///
/// rsx! {
///     MoodGrid {
///         selected: mood(),
///         on_select: move |m| mood.set(Some(m))
///     }
/// }
/// ```
#[component]
pub fn MoodGrid(props: MoodGridProps) -> Element {
    rsx! {
        div {
            class: "mood-grid",
            role: "radiogroup",
            "aria-label": "Humeur du jour",
            for mood in Mood::ALL {
                {
                    let is_selected = props.selected == Some(mood);
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{mood.label()}",
                            class: mood_button_class(mood, props.selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(mood),
                            div { class: "mood-emoji", "{mood.emoji()}" }
                            div { class: "mood-label", "{mood.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_selected_mood_is_active() {
        let selected = Some(Mood::Bien);
        assert_eq!(mood_button_class(Mood::Bien, selected), "mood-btn mood-good active");
        assert_eq!(mood_button_class(Mood::Neutre, selected), "mood-btn mood-neutral");
    }

    #[test]
    fn nothing_active_without_selection() {
        for mood in Mood::ALL {
            assert!(!mood_button_class(mood, None).ends_with("active"));
        }
    }

    #[test]
    fn renders_all_moods_with_one_active() {
        fn harness() -> Element {
            rsx! {
                MoodGrid { selected: Some(Mood::Neutre), on_select: move |_| {} }
            }
        }

        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        for mood in Mood::ALL {
            assert!(html.contains(mood.emoji()));
        }
        assert_eq!(html.matches(" active\"").count(), 1);
        assert!(html.contains("mood-btn mood-neutral active"));
    }
}
