//! Launch configuration for the desktop window.
//!
//! Built from command line arguments in `main`, validated once, then stored
//! globally so the root component can pick its start page.

use std::sync::OnceLock;

use cerveau_core::{DashboardError, Page, Result};

/// Default window size: a tall phone-shaped window
pub const DEFAULT_WIDTH: f64 = 420.0;
pub const DEFAULT_HEIGHT: f64 = 860.0;

/// Default tracing directive when RUST_LOG is unset
pub const DEFAULT_LOG: &str = "info";

static LAUNCH_CONFIG: OnceLock<LaunchConfig> = OnceLock::new();

#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    /// Page shown when the window opens
    pub start_page: Page,
    pub window_width: f64,
    pub window_height: f64,
    pub log_directive: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            start_page: Page::Home,
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
            log_directive: DEFAULT_LOG.to_string(),
        }
    }
}

impl LaunchConfig {
    /// Reject window dimensions the windowing layer cannot use
    pub fn validate(self) -> Result<Self> {
        for (name, value) in [("width", self.window_width), ("height", self.window_height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DashboardError::InvalidConfig(format!(
                    "window {} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(self)
    }
}

/// Store the config for the root component. Later calls are ignored.
pub fn install(config: LaunchConfig) {
    let _ = LAUNCH_CONFIG.set(config);
}

/// The installed config, or the defaults when launched without one
pub fn launch_config() -> LaunchConfig {
    LAUNCH_CONFIG.get().cloned().unwrap_or_default()
}
