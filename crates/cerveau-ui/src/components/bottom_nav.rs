//! Bottom Navigation Component
//!
//! Fixed tab bar at the bottom of the window, one button per page.

use cerveau_core::Page;
use dioxus::prelude::*;

/// Class attribute of a navigation button
pub fn nav_item_class(active: bool) -> &'static str {
    if active {
        "nav-item active"
    } else {
        "nav-item"
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BottomNavProps {
    /// Page currently on screen
    pub current: Page,
    /// Callback when a tab is clicked
    pub on_select: EventHandler<Page>,
}

/// Bottom tab bar
///
/// Shows: Accueil | Stats | Journal | Défis | Réglages
#[component]
pub fn BottomNav(props: BottomNavProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        nav { class: "bottom-nav",
            div { class: "nav-container",
                for page in Page::ALL {
                    button {
                        key: "{page.id()}",
                        class: nav_item_class(page == props.current),
                        "aria-current": if page == props.current { "page" } else { "false" },
                        onclick: move |_| on_select.call(page),

                        span { class: "nav-icon", "{page.icon()}" }
                        span { class: "nav-label", "{page.nav_label()}" }
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
    fn active_class() {
        assert_eq!(nav_item_class(true), "nav-item active");
        assert_eq!(nav_item_class(false), "nav-item");
    }

    #[test]
    fn marks_only_current_page() {
        fn harness() -> Element {
            rsx! {
                BottomNav { current: Page::Journal, on_select: move |_| {} }
            }
        }

        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches("nav-item active").count(), 1);
        assert_eq!(html.matches("class=\"nav-item\"").count(), 4);
        assert!(html.contains("aria-current=\"page\""));
        for page in Page::ALL {
            assert!(html.contains(page.icon()));
        }
    }
}
