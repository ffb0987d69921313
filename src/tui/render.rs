//! Main render/view function (View in TEA pattern)

use super::{layout, widgets};
use crate::app::state::{AppState, DashboardFocus, UiMode};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;


/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    match state.mode {
        UiMode::Loading => render_loading(frame, state),
        UiMode::Dashboard | UiMode::ActionMenu => render_dashboard(frame, state),
        UiMode::CompareDialog => render_compare_dialog(frame, state),
        UiMode::ComparePage => render_compare_page(frame, state),
    }

    if state.mode == UiMode::ActionMenu {
        if let Some(menu) = state.action_menu.as_ref() {
            frame.render_widget(widgets::ActionMenu::new(menu), frame.area());
        }
    }

    // The file diff modal overlays whatever is beneath it
    if let Some(modal) = state.file_diff_modal.as_ref() {
        frame.render_widget(widgets::DiffModal::new(modal), frame.area());
    }
}

/// Startup screen while the first listing loads
fn render_loading(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .split(area);

    frame.render_widget(widgets::Header::new(&state.config_name), chunks[0]);

    let body = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(chunks[1]);
    frame.render_widget(
        Paragraph::new("Loading snapshots...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        body[1],
    );

    render_status(frame, state, chunks[2]);
}

fn render_dashboard(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let show_diff = state.visible_row_diff().is_some();
    let areas = layout::dashboard(area, state.configs.len(), show_diff);

    frame.render_widget(widgets::Header::new(&state.config_name), areas.header);

    if let Some(configs_area) = areas.configs {
        frame.render_widget(
            widgets::ConfigsPanel::new(&state.configs, &state.config_name),
            configs_area,
        );
    }

    frame.render_widget(widgets::SnapshotTable::new(state), areas.table);

    if let (Some(diff_area), Some(diff)) = (areas.diff, state.visible_row_diff()) {
        let focused = state.dashboard.focus == DashboardFocus::DiffPanel;
        frame.render_widget(
            widgets::DiffView::new(diff, focused, state.tick_count),
            diff_area,
        );
    }

    render_status(frame, state, areas.status);
}

/// The compare dialog draws over whichever screen opened it
fn render_compare_dialog(frame: &mut Frame, state: &AppState) {
    let beneath = state
        .compare_dialog
        .as_ref()
        .map(|dialog| dialog.return_mode)
        .unwrap_or(UiMode::Dashboard);

    if beneath == UiMode::ComparePage && state.compare_page.is_some() {
        render_compare_page(frame, state);
    } else {
        render_dashboard(frame, state);
    }

    if let Some(dialog) = state.compare_dialog.as_ref() {
        frame.render_widget(
            widgets::CompareDialog::new(dialog, &state.snapshots, &state.settings.ui.date_format),
            frame.area(),
        );
    }
}

fn render_compare_page(frame: &mut Frame, state: &AppState) {
    let Some(diff) = state.compare_page.as_ref() else {
        render_dashboard(frame, state);
        return;
    };

    let areas = layout::compare(frame.area());

    frame.render_widget(widgets::Header::new(&state.config_name), areas.header);

    let breadcrumb = Line::from(vec![
        Span::styled(" Snapshots", Style::default().fg(Color::Cyan)),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} - {}", diff.pre, diff.post),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(breadcrumb), areas.breadcrumb);

    frame.render_widget(
        widgets::DiffView::new(diff, state.mode == UiMode::ComparePage, state.tick_count),
        areas.diff,
    );
    render_status(frame, state, areas.status);
}

fn render_status(frame: &mut Frame, state: &AppState, area: ratatui::layout::Rect) {
    if layout::use_compact_status(frame.area()) {
        frame.render_widget(widgets::StatusBarCompact::new(state), area);
    } else {
        frame.render_widget(widgets::StatusBar::new(state), area);
    }
}
