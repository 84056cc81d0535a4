//! Cerveau UI Components
//!
//! Dioxus building blocks for the Cerveau dashboard, styled by the global
//! stylesheet shipped with the desktop app.
//!
//! ## Design Philosophy
//!
//! Soft mobile cards on a calm background:
//! - **Teal (#14b8a6)**: primary actions, active navigation
//! - **Emerald / Orange**: gauge fills
//! - **Per-mood tints**: mood buttons (`mood-excellent`, `mood-good`, ...)
//!
//! Components only render and forward clicks. State lives in
//! `cerveau_core::DashboardState`, owned by the app root.

pub mod components;

pub use components::*;
