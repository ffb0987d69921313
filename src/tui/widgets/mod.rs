//! Custom widget components

mod action_menu;
mod compare_dialog;
mod configs_panel;
mod diff_modal;
mod diff_view;
mod header;
mod snapshot_table;
mod status_bar;

pub use action_menu::ActionMenu;
pub use compare_dialog::CompareDialog;
pub use configs_panel::ConfigsPanel;
pub use diff_modal::DiffModal;
pub use diff_view::DiffView;
pub use header::Header;
pub use snapshot_table::SnapshotTable;
pub use status_bar::{StatusBar, StatusBarCompact};

use ratatui::layout::{Constraint, Layout, Rect};

/// Calculate a modal area centered in the parent
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
