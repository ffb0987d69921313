//! Main update function - handles state transitions (TEA pattern)

use crate::app::message::Message;
use crate::app::state::{
    ActionMenuState, AppState, CompareDialogState, DashboardFocus, DiffTarget, DiffViewState,
    UiMode,
};
use crate::common::prelude::*;
use crate::core::pair_snapshots;

use super::{
    diff::{handle_diff_activate, handle_diff_failed, handle_diff_loaded, handle_toggle_expand},
    keys::handle_key,
    UpdateAction, UpdateResult,
};

/// Lines a modal page scroll moves
const MODAL_PAGE_LINES: usize = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Listing Messages
        // ─────────────────────────────────────────────────────────
        Message::RefreshSnapshots => {
            if state.dashboard.loading {
                return UpdateResult::none();
            }
            state.dashboard.loading = true;
            UpdateResult::action(UpdateAction::LoadSnapshots)
        }

        Message::SnapshotsLoaded { configs, snapshots } => {
            info!(
                "Loaded {} configs and {} snapshots for '{}'",
                configs.len(),
                snapshots.len(),
                state.config_name
            );
            state.configs = configs;
            state.groups = pair_snapshots(snapshots.clone());
            state.snapshots = snapshots;
            state.dashboard.loading = false;
            state.dashboard.load_error = false;
            state.dashboard.prune_rows(&state.groups);
            state.clamp_selection();
            if state.mode == UiMode::Loading {
                state.mode = UiMode::Dashboard;
            }
            UpdateResult::none()
        }

        Message::SnapshotLoadFailed { error } => {
            error!("Snapshot listing failed: {}", error);
            state.dashboard.loading = false;
            state.dashboard.load_error = true;
            if state.mode == UiMode::Loading {
                state.mode = UiMode::Dashboard;
            }
            UpdateResult::none()
        }

        Message::ToolsChecked { tools } => {
            if let Some(hint) = tools.sndiff_unavailable_message() {
                warn!("{}", hint);
            }
            if let Some(hint) = tools.snapper_unavailable_message() {
                warn!("{}", hint);
            }
            state.tools = tools;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dashboard Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            if !state.groups.is_empty()
                && state.dashboard.selected_index < state.groups.len() - 1
            {
                state.dashboard.selected_index += 1;
            }
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            state.dashboard.selected_index = state.dashboard.selected_index.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ToggleExpand => handle_toggle_expand(state),

        Message::FocusDiff => {
            if state.visible_row_diff().is_some() {
                state.dashboard.focus = DashboardFocus::DiffPanel;
            }
            UpdateResult::none()
        }

        Message::FocusTable => {
            state.dashboard.focus = DashboardFocus::Table;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Action Menu Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenActionMenu => {
            if let Some(group) = state.selected_group() {
                state.action_menu = Some(ActionMenuState::for_group(group));
                state.mode = UiMode::ActionMenu;
            }
            UpdateResult::none()
        }

        Message::CloseActionMenu => {
            state.action_menu = None;
            state.mode = UiMode::Dashboard;
            UpdateResult::none()
        }

        Message::ActionMenuUp => {
            if let Some(menu) = state.action_menu.as_mut() {
                menu.select_previous();
            }
            UpdateResult::none()
        }

        Message::ActionMenuDown => {
            if let Some(menu) = state.action_menu.as_mut() {
                menu.select_next();
            }
            UpdateResult::none()
        }

        Message::ActionMenuConfirm => {
            let number = state
                .action_menu
                .as_ref()
                .and_then(|menu| menu.selected())
                .map(|entry| entry.number);
            state.action_menu = None;
            state.mode = UiMode::Dashboard;
            match number {
                Some(number) => {
                    info!("Rollback to snapshot {} requested", number);
                    UpdateResult::action(UpdateAction::Rollback { number })
                }
                None => UpdateResult::none(),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Rollback Messages
        // ─────────────────────────────────────────────────────────
        Message::RollbackFinished { number, output } => {
            info!("Rollback to snapshot {} succeeded: {}", number, output.trim());
            UpdateResult::none()
        }

        Message::RollbackFailed { number, error } => {
            error!("Rollback to snapshot {} failed: {}", number, error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Diff Messages
        // ─────────────────────────────────────────────────────────
        Message::DiffLoaded {
            target,
            generation,
            result,
        } => {
            handle_diff_loaded(state, target, generation, result);
            UpdateResult::none()
        }

        Message::DiffFailed {
            target,
            generation,
            error,
        } => {
            handle_diff_failed(state, target, generation, &error);
            UpdateResult::none()
        }

        Message::DiffCursorUp => {
            if let Some(diff) = state.focused_diff_mut() {
                diff.cursor_up();
            }
            UpdateResult::none()
        }

        Message::DiffCursorDown => {
            if let Some(diff) = state.focused_diff_mut() {
                diff.cursor_down();
            }
            UpdateResult::none()
        }

        Message::DiffActivate => handle_diff_activate(state),

        // ─────────────────────────────────────────────────────────
        // File-Diff Modal Messages
        // ─────────────────────────────────────────────────────────
        Message::CloseFileDiffModal => {
            state.file_diff_modal = None;
            UpdateResult::none()
        }

        Message::ModalScrollUp => {
            if let Some(modal) = state.file_diff_modal.as_mut() {
                modal.scroll_up(1);
            }
            UpdateResult::none()
        }

        Message::ModalScrollDown => {
            if let Some(modal) = state.file_diff_modal.as_mut() {
                modal.scroll_down(1);
            }
            UpdateResult::none()
        }

        Message::ModalPageUp => {
            if let Some(modal) = state.file_diff_modal.as_mut() {
                modal.scroll_up(MODAL_PAGE_LINES);
            }
            UpdateResult::none()
        }

        Message::ModalPageDown => {
            if let Some(modal) = state.file_diff_modal.as_mut() {
                modal.scroll_down(MODAL_PAGE_LINES);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Compare Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenCompareDialog => {
            if !state.tools.sndiff {
                debug!("Ignoring compare request: sndiff unavailable");
                return UpdateResult::none();
            }
            if state.snapshots.is_empty() {
                debug!("Ignoring compare request: no snapshots listed");
                return UpdateResult::none();
            }
            state.compare_dialog = Some(CompareDialogState::new(state.mode));
            state.mode = UiMode::CompareDialog;
            UpdateResult::none()
        }

        Message::CloseCompareDialog => {
            let return_mode = state
                .compare_dialog
                .take()
                .map(|dialog| dialog.return_mode)
                .unwrap_or(UiMode::Dashboard);
            state.mode = return_mode;
            UpdateResult::none()
        }

        Message::CompareDialogUp => {
            let count = state.snapshots.len();
            if let Some(dialog) = state.compare_dialog.as_mut() {
                dialog.select_previous(count);
            }
            UpdateResult::none()
        }

        Message::CompareDialogDown => {
            let count = state.snapshots.len();
            if let Some(dialog) = state.compare_dialog.as_mut() {
                dialog.select_next(count);
            }
            UpdateResult::none()
        }

        Message::CompareDialogPick => handle_compare_dialog_pick(state),

        Message::LeaveComparePage => {
            state.mode = UiMode::Dashboard;
            UpdateResult::none()
        }
    }
}

/// Confirm the highlighted snapshot for the current dialog slot.
///
/// The first pick fills the first slot; the second pick seeds the compare
/// page and starts its fetch.
fn handle_compare_dialog_pick(state: &mut AppState) -> UpdateResult {
    let Some(dialog) = state.compare_dialog.as_mut() else {
        return UpdateResult::none();
    };
    let Some(picked) = state.snapshots.get(dialog.selected_index).map(|s| s.number) else {
        return UpdateResult::none();
    };

    let Some(first) = dialog.first else {
        dialog.first = Some(picked);
        return UpdateResult::none();
    };

    state.compare_dialog = None;
    state.mode = UiMode::ComparePage;

    let (pre, post) = (first, picked);
    let diff = state
        .compare_page
        .get_or_insert_with(|| DiffViewState::new(pre, post));
    diff.reseed(pre, post);
    let generation = diff.begin_fetch();

    UpdateResult::action(UpdateAction::FetchDiff {
        target: DiffTarget::ComparePage,
        pre,
        post,
        generation,
    })
}
