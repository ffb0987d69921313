//! Application layer - state management and orchestration

pub mod handler;
pub mod message;
pub mod signals;
pub mod state;

// Re-export handler types for event loop integration
pub use handler::{UpdateAction, UpdateResult};

use crate::common::prelude::*;
use crate::tui;

/// Main application entry point
///
/// Initializes error handling and logging, then runs the TUI against the
/// given snapper config. An optional pre/post pair opens the comparison
/// page directly, with the dashboard listing still loading behind it.
pub async fn run(config_name: &str, compare: Option<(u64, u64)>) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    crate::common::logging::init()?;

    info!("═══════════════════════════════════════════════════════");
    info!("Snapdeck starting");
    info!("Snapper config: {}", config_name);
    info!("═══════════════════════════════════════════════════════");

    let result = tui::run(config_name, compare).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Snapdeck exiting");
    result
}
