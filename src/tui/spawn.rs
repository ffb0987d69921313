//! Background task spawning for async operations
//!
//! Contains functions that spawn background tokio tasks for:
//! - Snapshot listing (configs + snapshots)
//! - Tool availability probing
//! - Rollback execution
//! - Diff fetching

use tokio::sync::mpsc;

use crate::app::message::Message;
use crate::app::state::DiffTarget;
use crate::config::Settings;
use crate::snapper::{self, ToolAvailability};

/// Spawn snapshot listing in background
///
/// Loads the config list and the snapshot listing for the active config
/// in one task; either failure reports the whole load as failed.
pub fn spawn_snapshot_load(msg_tx: mpsc::Sender<Message>, settings: Settings, config_name: String) {
    tokio::spawn(async move {
        let loaded = load_listing(&settings, &config_name).await;
        match loaded {
            Ok((configs, snapshots)) => {
                let _ = msg_tx
                    .send(Message::SnapshotsLoaded { configs, snapshots })
                    .await;
            }
            Err(e) => {
                let _ = msg_tx
                    .send(Message::SnapshotLoadFailed {
                        error: e.to_string(),
                    })
                    .await;
            }
        }
    });
}

async fn load_listing(
    settings: &Settings,
    config_name: &str,
) -> crate::common::error::Result<(
    Vec<crate::core::SnapshotConfig>,
    Vec<crate::core::Snapshot>,
)> {
    let configs = snapper::list_configs(settings).await?;
    let snapshots = snapper::list_snapshots(settings, config_name).await?;
    Ok((configs, snapshots))
}

/// Spawn tool availability check in background
pub fn spawn_tool_check(msg_tx: mpsc::Sender<Message>, settings: Settings) {
    tokio::spawn(async move {
        let tools = ToolAvailability::check(&settings);
        let _ = msg_tx.send(Message::ToolsChecked { tools }).await;
    });
}

/// Spawn rollback execution in background
pub fn spawn_rollback(msg_tx: mpsc::Sender<Message>, settings: Settings, number: u64) {
    tokio::spawn(async move {
        match snapper::rollback(&settings, number).await {
            Ok(output) => {
                let _ = msg_tx
                    .send(Message::RollbackFinished { number, output })
                    .await;
            }
            Err(e) => {
                let _ = msg_tx
                    .send(Message::RollbackFailed {
                        number,
                        error: e.to_string(),
                    })
                    .await;
            }
        }
    });
}

/// Spawn a diff fetch in background
///
/// The generation travels with the completion message so stale results
/// can be recognized and discarded.
pub fn spawn_diff_fetch(
    msg_tx: mpsc::Sender<Message>,
    settings: Settings,
    target: DiffTarget,
    pre: u64,
    post: u64,
    generation: u64,
) {
    tokio::spawn(async move {
        match snapper::fetch_diff(&settings, pre, post).await {
            Ok(result) => {
                let _ = msg_tx
                    .send(Message::DiffLoaded {
                        target,
                        generation,
                        result,
                    })
                    .await;
            }
            Err(e) => {
                let _ = msg_tx
                    .send(Message::DiffFailed {
                        target,
                        generation,
                        error: e.to_string(),
                    })
                    .await;
            }
        }
    });
}
