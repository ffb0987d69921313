//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;

use crate::app::message::Message;
use crate::app::UpdateAction;
use crate::config::Settings;

use super::spawn;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    settings: Settings,
    config_name: String,
) {
    match action {
        UpdateAction::LoadSnapshots => {
            spawn::spawn_snapshot_load(msg_tx, settings, config_name);
        }

        UpdateAction::CheckTools => {
            spawn::spawn_tool_check(msg_tx, settings);
        }

        UpdateAction::Rollback { number } => {
            spawn::spawn_rollback(msg_tx, settings, number);
        }

        UpdateAction::FetchDiff {
            target,
            pre,
            post,
            generation,
        } => {
            spawn::spawn_diff_fetch(msg_tx, settings, target, pre, post, generation);
        }
    }
}
