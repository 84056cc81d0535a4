//! Color constants mirrored by the CSS custom properties in `styles.rs`.
//!
//! Calm mobile palette: slate backgrounds, teal actions, mood tints.

#![allow(dead_code)]

// === SURFACES ===
pub const BACKGROUND: &str = "#f1f5f9";
pub const CARD: &str = "#ffffff";
pub const BORDER: &str = "#e2e8f0";

// === ACCENTS ===
pub const TEAL: &str = "#14b8a6";
pub const TEAL_DARK: &str = "#0f766e";
pub const EMERALD: &str = "#10b981";
pub const ORANGE: &str = "#f97316";

// === MOODS ===
pub const MOOD_EXCELLENT: &str = "#22c55e";
pub const MOOD_GOOD: &str = "#14b8a6";
pub const MOOD_NEUTRAL: &str = "#eab308";
pub const MOOD_TIRED: &str = "#a855f7";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#0f172a";
pub const TEXT_SECONDARY: &str = "#475569";
pub const TEXT_MUTED: &str = "#94a3b8";
