use cerveau_core::{DashboardState, Page};
use cerveau_ui::BottomNav;
use dioxus::prelude::*;

use crate::config::launch_config;
use crate::context::provide_dashboard;
use crate::pages::{Challenges, Home, Journal, Settings, Statistics};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the dashboard state, opened on the
/// configured start page.
#[component]
pub fn App() -> Element {
    let start = launch_config().start_page;

    rsx! {
        style { {GLOBAL_STYLES} }
        Dashboard { initial: DashboardState::starting_at(start) }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DashboardProps {
    /// State the dashboard opens with
    pub initial: DashboardState,
}

/// Page area plus bottom navigation.
///
/// Only the current page is mounted; switching pages unmounts the old one.
#[component]
pub fn Dashboard(props: DashboardProps) -> Element {
    let mut dashboard = provide_dashboard(props.initial);
    let current = dashboard.read().page();

    let on_navigate = move |page: Page| {
        dashboard.write().select_page(page);
    };

    rsx! {
        div { class: "app-container",
            main { class: "main-content",
                {render_page(current)}
            }
            BottomNav { current: current, on_select: on_navigate }
        }
    }
}

fn render_page(page: Page) -> Element {
    match page {
        Page::Home => rsx! { Home {} },
        Page::Stats => rsx! { Statistics {} },
        Page::Journal => rsx! { Journal {} },
        Page::Challenges => rsx! { Challenges {} },
        Page::Settings => rsx! { Settings {} },
    }
}
