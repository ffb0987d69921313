//! Diff view handlers: expansion, fetch completion, activation

use crate::app::state::{
    AppState, DashboardFocus, DiffItem, DiffTarget, DiffViewState, FileDiffModalState,
};
use crate::common::prelude::*;
use crate::core::DiffResult;

use super::{UpdateAction, UpdateResult};

/// Expand or collapse the selected dashboard row.
///
/// First expansion creates the row's diff instance and starts its fetch.
/// Collapsing keeps the instance, so re-expansion shows the cached result.
pub fn handle_toggle_expand(state: &mut AppState) -> UpdateResult {
    if !state.tools.sndiff {
        debug!("Ignoring expand request: sndiff unavailable");
        return UpdateResult::none();
    }

    let Some(group) = state.selected_group() else {
        return UpdateResult::none();
    };
    let key = group.key();
    let Some((pre, post)) = group.pair_numbers() else {
        debug!("Row {} is not a pair, nothing to expand", key);
        return UpdateResult::none();
    };

    if state.dashboard.is_expanded(&key) {
        state.dashboard.toggle_expanded(&key);
        state.dashboard.focus = DashboardFocus::Table;
        return UpdateResult::none();
    }

    state.dashboard.toggle_expanded(&key);

    // Re-expansion reuses the retained instance without refetching
    if state.dashboard.row_diffs.contains_key(&key) {
        return UpdateResult::none();
    }

    let mut diff = DiffViewState::new(pre, post);
    let generation = diff.begin_fetch();
    state.dashboard.row_diffs.insert(key.clone(), diff);

    UpdateResult::action(UpdateAction::FetchDiff {
        target: DiffTarget::Row { key },
        pre,
        post,
        generation,
    })
}

/// Apply a completed diff fetch, discarding stale completions.
///
/// A completion is stale when its generation differs from the instance's
/// current one, meaning a newer fetch superseded it while it was in flight.
pub fn handle_diff_loaded(
    state: &mut AppState,
    target: DiffTarget,
    generation: u64,
    result: DiffResult,
) {
    let Some(diff) = state.diff_mut(&target) else {
        debug!("Diff result for unknown target {:?}, discarding", target);
        return;
    };

    if diff.generation != generation {
        debug!(
            "Stale diff result for {:?} (generation {} != {}), discarding",
            target, generation, diff.generation
        );
        return;
    }

    diff.result = Some(result);
    diff.open_sections.clear();
    diff.cursor = 0;
}

/// Record a failed diff fetch.
///
/// The instance stays in loading state: failures are reported only to the
/// diagnostic log.
pub fn handle_diff_failed(state: &mut AppState, target: DiffTarget, generation: u64, error: &str) {
    let Some(diff) = state.diff_mut(&target) else {
        debug!("Diff failure for unknown target {:?}, discarding", target);
        return;
    };

    if diff.generation != generation {
        debug!(
            "Stale diff failure for {:?} (generation {} != {}), discarding",
            target, generation, diff.generation
        );
        return;
    }

    error!("Diff fetch for {:?} failed: {}", target, error);
}

/// Activate the item under the focused diff cursor: headers toggle their
/// section, modified-file entries with diff text open the file-diff modal.
pub fn handle_diff_activate(state: &mut AppState) -> UpdateResult {
    let Some(diff) = state.focused_diff_mut() else {
        return UpdateResult::none();
    };

    match diff.cursor_item() {
        Some(DiffItem::Header(section)) => {
            diff.toggle_section(section);
            UpdateResult::none()
        }
        Some(DiffItem::Entry(section, index)) => {
            let modal = diff
                .result
                .as_ref()
                .and_then(|r| r.modified_file(section, index))
                .and_then(|file| {
                    file.file_diff
                        .as_ref()
                        .map(|text| FileDiffModalState::new(file.path.clone(), text.clone()))
                });

            if let Some(modal) = modal {
                state.file_diff_modal = Some(modal);
            }
            UpdateResult::none()
        }
        None => UpdateResult::none(),
    }
}
