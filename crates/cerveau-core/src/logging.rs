//! Tracing subscriber setup.
//!
//! ```ignore
//! // honours RUST_LOG, falls back to "info"
//! cerveau_core::logging::init("info")?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{DashboardError, Result};

/// Build the filter: `RUST_LOG` when set and valid, otherwise `default_directive`.
pub fn env_filter(default_directive: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_directive)
        .map_err(|e| DashboardError::Logging(format!("bad filter '{}': {}", default_directive, e)))
}

/// Install the global fmt subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init(default_directive: &str) -> Result<()> {
    let filter = env_filter(default_directive)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| DashboardError::Logging(e.to_string()))
}
