//! Settings page - preference toggles.
//!
//! Checkboxes keep their own DOM state; nothing reads them back.

use cerveau_core::content::SETTINGS;
use cerveau_core::Page;
use cerveau_ui::Widget;
use dioxus::prelude::*;

#[component]
pub fn Settings() -> Element {
    rsx! {
        div { class: "page-content page-settings",
            h1 { class: "page-title", "{Page::Settings.heading()}" }
            Widget { title: "Préférences", icon: "⚙️",
                div { class: "settings-list",
                    for toggle in SETTINGS {
                        label { key: "{toggle.label}", class: "setting-item",
                            span { "{toggle.label}" }
                            input {
                                r#type: "checkbox",
                                initial_checked: toggle.initially_checked,
                            }
                        }
                    }
                }
            }
        }
    }
}
