//! Reusable dashboard components
//!
//! Every component renders plain HTML with class names from the global
//! stylesheet; none of them own application state.

mod bottom_nav;
mod button;
mod empty_state;
mod mood_grid;
mod stat_bar;
mod widget;

pub use bottom_nav::*;
pub use button::*;
pub use empty_state::*;
pub use mood_grid::*;
pub use stat_bar::*;
pub use widget::*;
