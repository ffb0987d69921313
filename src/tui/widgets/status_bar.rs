//! Status bar widget
//!
//! Displays listing state, row position, focus hints, and tool warnings.

use crate::app::state::{AppState, DashboardFocus, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Get the listing indicator with appropriate styling
    fn state_indicator(&self) -> Span<'static> {
        if self.state.dashboard.loading {
            Span::styled(
                "↻ Loading",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else if self.state.dashboard.load_error {
            Span::styled(
                "✗ Listing failed (see log)",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("● {} snapshots", self.state.snapshots.len()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        }
    }

    /// Get row position span (dashboard only)
    fn row_position(&self) -> Option<Span<'static>> {
        if self.state.groups.is_empty() {
            return None;
        }
        Some(Span::styled(
            format!(
                "row {}/{}",
                self.state.dashboard.selected_index + 1,
                self.state.groups.len()
            ),
            Style::default().fg(Color::Gray),
        ))
    }

    /// Get context hint for the current focus/mode
    fn context_hint(&self) -> Option<Span<'static>> {
        let hint = match self.state.mode {
            UiMode::Dashboard if self.state.dashboard.focus == DashboardFocus::DiffPanel => {
                "[Enter] Toggle/Open  [Tab] Back to table"
            }
            UiMode::ComparePage => "[Enter] Toggle/Open  [c] New comparison  [Esc] Back",
            _ => return None,
        };
        Some(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    }

    /// Get tool warning span
    fn tool_warning(&self) -> Option<Span<'static>> {
        let text = self
            .state
            .tools
            .snapper_unavailable_message()
            .or_else(|| self.state.tools.sndiff_unavailable_message())?;
        Some(Span::styled(text, Style::default().fg(Color::Red)))
    }

    /// Build all segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let mut segments = Vec::new();
        segments.push(self.state_indicator());

        if let Some(position) = self.row_position() {
            segments.push(separator.clone());
            segments.push(position);
        }

        if let Some(hint) = self.context_hint() {
            segments.push(separator.clone());
            segments.push(hint);
        }

        if let Some(warning) = self.tool_warning() {
            segments.push(separator);
            segments.push(warning);
        }

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(self.build_segments());
        Paragraph::new(line)
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}

/// Compact status bar for narrow terminals
pub struct StatusBarCompact<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarCompact<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBarCompact<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar = StatusBar::new(self.state);
        let mut segments = vec![bar.state_indicator()];
        if let Some(warning) = bar.tool_warning() {
            segments.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            segments.push(warning);
        }

        Paragraph::new(Line::from(segments))
            .block(Block::default().borders(Borders::TOP))
            .render(area, buf);
    }
}
