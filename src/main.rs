#![allow(non_snake_case)]

mod app;
mod config;
pub mod context;
mod pages;
mod theme;

use cerveau_core::Page;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::config::{LaunchConfig, DEFAULT_HEIGHT, DEFAULT_LOG, DEFAULT_WIDTH};

/// Cerveau - brain weather dashboard
#[derive(Parser, Debug)]
#[command(name = "cerveau-desktop")]
#[command(about = "Cerveau - mobile-style dashboard for your daily brain check-in")]
struct Args {
    /// Page to open on launch (home, stats, journal, challenges, settings)
    #[arg(short, long, default_value = "home")]
    page: Page,

    /// Window width in logical pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = DEFAULT_LOG)]
    log: String,
}

impl Args {
    fn into_config(self) -> LaunchConfig {
        LaunchConfig {
            start_page: self.page,
            window_width: self.width,
            window_height: self.height,
            log_directive: self.log,
        }
    }
}

fn main() {
    let args = Args::parse();
    let config = args.into_config();

    if let Err(e) = cerveau_core::logging::init(&config.log_directive) {
        eprintln!("{}", e);
    }

    let config = match config.validate() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Refusing to launch: {}", e);
            std::process::exit(2);
        }
    };

    tracing::info!(
        "Starting Cerveau on '{}' ({}x{})",
        config.start_page,
        config.window_width,
        config.window_height
    );

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cerveau")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                config.window_width,
                config.window_height,
            ))
            .with_resizable(true),
    );

    config::install(config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
