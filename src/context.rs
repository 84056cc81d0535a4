//! Dashboard state context for Cerveau.
//!
//! The root component creates one `Signal<DashboardState>` and provides it
//! to every descendant via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut dashboard = use_dashboard();
//! let page = dashboard.read().page();
//! dashboard.write().select_page(Page::Stats);
//! ```

use cerveau_core::DashboardState;
use dioxus::prelude::*;

/// Install a fresh dashboard state signal for the subtree.
pub fn provide_dashboard(initial: DashboardState) -> Signal<DashboardState> {
    let dashboard = use_signal(|| initial);
    use_context_provider(|| dashboard)
}

/// Hook to access the dashboard state from context.
pub fn use_dashboard() -> Signal<DashboardState> {
    use_context::<Signal<DashboardState>>()
}
