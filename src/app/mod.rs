//! Application layer - state management and orchestration

pub mod form;
pub mod handler;
pub mod message;
pub mod request;
pub mod signals;
pub mod state;

// Re-export handler types for event loop integration
pub use handler::{FetchTask, UpdateAction, UpdateResult};

use std::path::Path;

use crate::common::prelude::*;
use crate::config;
use crate::tui;

/// Main application entry point
///
/// Installs error/log infrastructure, loads settings, and hands control to
/// the TUI event loop. Returns when the user quits or the terminal is lost.
///
/// Settings are loaded after the logging subscriber is installed so a
/// broken config file's warning actually lands in the log.
pub async fn run(config_path: Option<&Path>, api_url: Option<String>) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    crate::common::logging::init()?;

    let mut settings = config::load_settings(config_path);
    if let Some(api_url) = api_url {
        settings.api.base_url = api_url;
    }

    info!("═══════════════════════════════════════════════════════");
    info!("Postdeck starting");
    info!("API: {}", settings.api.base_url);
    info!("═══════════════════════════════════════════════════════");

    let result = tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Postdeck exiting");
    result
}
