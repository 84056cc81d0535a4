//! Button Components
//!
//! Two styles from the dashboard stylesheet:
//! - Primary: filled teal, main call to action of a card
//! - Secondary: outlined, side actions such as starting a focus session

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

/// Full class attribute for a button: `btn <variant> [extra]`
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra.filter(|e| !e.is_empty()) {
        Some(extra) => format!("btn {} {}", variant.class(), extra),
        None => format!("btn {}", variant.class()),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler. Without one the button is inert.
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     // placeholder action, nothing happens on click
///     Button { "Commencer le défi" }
///
///     Button {
///         variant: ButtonVariant::Secondary,
///         onclick: move |_| start_session(),
///         "Démarrer"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
