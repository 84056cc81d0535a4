//! Cerveau Core Library
//!
//! Framework-free model behind the Cerveau dashboard.
//!
//! ## Overview
//!
//! Cerveau is a small mobile-style dashboard for checking in on how your
//! brain is doing today. The UI is five pages behind a bottom navigation bar.
//! Everything stateful lives in [`DashboardState`]:
//!
//! - **View router**: which [`Page`] is on screen
//! - **Mood selector**: which [`Mood`] (if any) is highlighted on Home
//!
//! The rest of the crate is the static display content the pages render.
//!
//! ## Quick Start
//!
//! ```
//! use cerveau_core::{DashboardState, Mood, Page};
//!
//! let mut state = DashboardState::new();
//! assert_eq!(state.page(), Page::Home);
//!
//! state.select_mood(Mood::Bien);
//! assert!(state.is_mood_active(Mood::Bien));
//!
//! state.select_page(Page::Journal);
//! assert_eq!(state.mood(), None);
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod mood;
pub mod page;
pub mod state;

// Re-exports
pub use content::{Challenge, Difficulty, Gauge, SettingToggle};
pub use error::{DashboardError, Result};
pub use mood::Mood;
pub use page::Page;
pub use state::DashboardState;
