//! Snapshot table widget
//!
//! Dashboard rows derived from the snapshot listing: pre/post pairs as a
//! single expandable row, everything else on its own row.

use crate::app::state::{AppState, DashboardFocus};
use crate::core::SnapshotGroup;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, Widget},
};

pub struct SnapshotTable<'a> {
    state: &'a AppState,
}

impl<'a> SnapshotTable<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Expansion marker for the first column
    fn marker(&self, group: &SnapshotGroup) -> &'static str {
        if !group.is_pair() {
            return " ";
        }
        if self.state.dashboard.is_expanded(&group.key()) {
            "▾"
        } else {
            "▸"
        }
    }

    fn row_style(&self, index: usize) -> Style {
        if index != self.state.dashboard.selected_index {
            return Style::default();
        }
        if self.state.dashboard.focus == DashboardFocus::Table {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray)
        }
    }
}

impl Widget for SnapshotTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let date_format = &self.state.settings.ui.date_format;

        let rows: Vec<Row> = self
            .state
            .groups
            .iter()
            .enumerate()
            .map(|(i, group)| {
                let display = group.display_snapshot();
                Row::new(vec![
                    self.marker(group).to_string(),
                    group.id_label(),
                    group.kind_label(),
                    display.date_display(date_format),
                    display.description.clone(),
                    display.userdata_display(),
                ])
                .style(self.row_style(i))
            })
            .collect();

        let header = Row::new(vec!["", "ID", "Type", "Date", "Description", "User Data"])
            .style(Style::default().fg(Color::DarkGray));

        let widths = [
            Constraint::Length(1),
            Constraint::Length(28),
            Constraint::Length(12),
            Constraint::Length(19),
            Constraint::Min(16),
            Constraint::Min(10),
        ];

        let title = if self.state.dashboard.loading {
            " Snapshots (loading...) "
        } else {
            " Snapshots "
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title));

        table.render(area, buf);
    }
}
