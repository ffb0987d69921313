//! Message types for the application (TEA pattern)

use crate::app::state::DiffTarget;
use crate::core::{DiffResult, Snapshot, SnapshotConfig};
use crate::snapper::ToolAvailability;
use crossterm::event::KeyEvent;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Listing Messages
    // ─────────────────────────────────────────────────────────
    /// Re-run the snapshot listing
    RefreshSnapshots,
    /// Listing task completed
    SnapshotsLoaded {
        configs: Vec<SnapshotConfig>,
        snapshots: Vec<Snapshot>,
    },
    /// Listing task failed
    SnapshotLoadFailed { error: String },
    /// Startup tool probe completed
    ToolsChecked { tools: ToolAvailability },

    // ─────────────────────────────────────────────────────────
    // Dashboard Messages
    // ─────────────────────────────────────────────────────────
    /// Move row selection down
    SelectNext,
    /// Move row selection up
    SelectPrevious,
    /// Expand or collapse the selected row's diff panel
    ToggleExpand,
    /// Move focus into the expanded diff panel
    FocusDiff,
    /// Return focus to the snapshot table
    FocusTable,

    // ─────────────────────────────────────────────────────────
    // Action Menu Messages
    // ─────────────────────────────────────────────────────────
    /// Open the rollback menu for the selected row
    OpenActionMenu,
    /// Close the rollback menu without acting
    CloseActionMenu,
    /// Navigate the menu up
    ActionMenuUp,
    /// Navigate the menu down
    ActionMenuDown,
    /// Dispatch the selected rollback
    ActionMenuConfirm,

    // ─────────────────────────────────────────────────────────
    // Rollback Messages
    // ─────────────────────────────────────────────────────────
    /// Rollback subprocess succeeded
    RollbackFinished { number: u64, output: String },
    /// Rollback subprocess failed
    RollbackFailed { number: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Diff Messages
    // ─────────────────────────────────────────────────────────
    /// A diff fetch completed
    DiffLoaded {
        target: DiffTarget,
        generation: u64,
        result: DiffResult,
    },
    /// A diff fetch could not produce a result
    DiffFailed {
        target: DiffTarget,
        generation: u64,
        error: String,
    },
    /// Move the diff cursor up
    DiffCursorUp,
    /// Move the diff cursor down
    DiffCursorDown,
    /// Activate the item under the diff cursor (toggle section / open file)
    DiffActivate,

    // ─────────────────────────────────────────────────────────
    // File-Diff Modal Messages
    // ─────────────────────────────────────────────────────────
    /// Dismiss the file-diff modal
    CloseFileDiffModal,
    /// Scroll the modal up one line
    ModalScrollUp,
    /// Scroll the modal down one line
    ModalScrollDown,
    /// Scroll the modal up one page
    ModalPageUp,
    /// Scroll the modal down one page
    ModalPageDown,

    // ─────────────────────────────────────────────────────────
    // Compare Messages
    // ─────────────────────────────────────────────────────────
    /// Open the snapshot comparison dialog
    OpenCompareDialog,
    /// Cancel the comparison dialog
    CloseCompareDialog,
    /// Navigate the dialog up
    CompareDialogUp,
    /// Navigate the dialog down
    CompareDialogDown,
    /// Pick the highlighted snapshot for the current slot
    CompareDialogPick,
    /// Leave the compare page back to the dashboard
    LeaveComparePage,
}
