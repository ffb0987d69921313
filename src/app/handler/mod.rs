//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `diff`: Diff view fetch/completion handlers
//! - `keys`: Key event handlers for UI modes

pub mod diff;
pub mod keys;
pub mod update;


use crate::app::message::Message;
use crate::app::state::DiffTarget;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// List configurations and snapshots in the background
    LoadSnapshots,

    /// Probe for the external tool binaries
    CheckTools,

    /// Roll back to a snapshot
    Rollback { number: u64 },

    /// Run a snapshot comparison for a diff view instance
    FetchDiff {
        target: DiffTarget,
        pre: u64,
        post: u64,
        generation: u64,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
