//! Key event handlers for different UI modes

use crate::app::message::Message;
use crate::app::state::{AppState, DashboardFocus, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    // The file-diff modal captures input over any mode
    if state.file_diff_modal.is_some() {
        return handle_key_file_diff_modal(key);
    }

    match state.mode {
        UiMode::Loading => handle_key_loading(key),
        UiMode::Dashboard => handle_key_dashboard(state, key),
        UiMode::ActionMenu => handle_key_action_menu(key),
        UiMode::CompareDialog => handle_key_compare_dialog(key),
        UiMode::ComparePage => handle_key_compare_page(key),
    }
}

/// Handle key events while the file-diff modal is open
fn handle_key_file_diff_modal(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::CloseFileDiffModal),
        KeyCode::Up | KeyCode::Char('k') => Some(Message::ModalScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::ModalScrollDown),
        KeyCode::PageUp => Some(Message::ModalPageUp),
        KeyCode::PageDown => Some(Message::ModalPageDown),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in loading mode
fn handle_key_loading(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        KeyCode::Char('r') => Some(Message::RefreshSnapshots),
        _ => None,
    }
}

/// Handle key events on the dashboard
fn handle_key_dashboard(state: &AppState, key: KeyEvent) -> Option<Message> {
    // With focus in the expanded diff panel, navigation goes to the panel
    if state.dashboard.focus == DashboardFocus::DiffPanel {
        return handle_key_diff_panel(key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Message::Quit),
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Message::Quit),

        // Row navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            Some(Message::SelectPrevious)
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Some(Message::SelectNext),

        // Expansion and panel focus
        (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            Some(Message::ToggleExpand)
        }
        (KeyCode::Tab, KeyModifiers::NONE) => Some(Message::FocusDiff),

        // Row actions and comparison
        (KeyCode::Char('a'), KeyModifiers::NONE) => Some(Message::OpenActionMenu),
        (KeyCode::Char('c'), KeyModifiers::NONE) => Some(Message::OpenCompareDialog),

        // Refresh listing
        (KeyCode::Char('r'), KeyModifiers::NONE) => Some(Message::RefreshSnapshots),

        _ => None,
    }
}

/// Handle key events with focus in an embedded diff panel
fn handle_key_diff_panel(key: KeyEvent) -> Option<Message> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Message::Quit),
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Message::Quit),

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Some(Message::DiffCursorUp),
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            Some(Message::DiffCursorDown)
        }
        (KeyCode::Enter, _) => Some(Message::DiffActivate),

        (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Esc, _) => Some(Message::FocusTable),

        _ => None,
    }
}

/// Handle key events in the rollback action menu
fn handle_key_action_menu(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Message::ActionMenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::ActionMenuDown),
        KeyCode::Enter => Some(Message::ActionMenuConfirm),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('a') => Some(Message::CloseActionMenu),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the compare dialog
fn handle_key_compare_dialog(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Message::CompareDialogUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::CompareDialogDown),
        KeyCode::Enter => Some(Message::CompareDialogPick),
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::CloseCompareDialog),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the compare page
fn handle_key_compare_page(key: KeyEvent) -> Option<Message> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Message::Quit),
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Message::Quit),

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Some(Message::DiffCursorUp),
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            Some(Message::DiffCursorDown)
        }
        (KeyCode::Enter, _) => Some(Message::DiffActivate),

        // Pick a different pair
        (KeyCode::Char('c'), KeyModifiers::NONE) => Some(Message::OpenCompareDialog),

        (KeyCode::Esc, _) => Some(Message::LeaveComparePage),

        _ => None,
    }
}
