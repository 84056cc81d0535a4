//! Error types for Cerveau

use thiserror::Error;

/// Main error type for Cerveau operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Page identifier outside the five known pages
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Mood label outside the four known moods
    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    /// Launch configuration rejected during validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Global tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for Cerveau operations
pub type Result<T> = std::result::Result<T, DashboardError>;
