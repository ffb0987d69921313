//! Compare dialog modal
//!
//! Two-step snapshot picker: the first confirmation chooses the pre
//! snapshot, the second chooses the post snapshot and opens the
//! comparison page.

use crate::app::state::CompareDialogState;
use crate::core::Snapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
};

use super::centered_rect;

pub struct CompareDialog<'a> {
    state: &'a CompareDialogState,
    snapshots: &'a [Snapshot],
    date_format: &'a str,
}

impl<'a> CompareDialog<'a> {
    pub fn new(
        state: &'a CompareDialogState,
        snapshots: &'a [Snapshot],
        date_format: &'a str,
    ) -> Self {
        Self {
            state,
            snapshots,
            date_format,
        }
    }

    fn title(&self) -> String {
        match self.state.first {
            None => " Select pre snapshot ".to_string(),
            Some(first) => format!(" Select post snapshot (pre: {}) ", first),
        }
    }
}

impl Widget for CompareDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 70, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(self.title())
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(inner);

        let height = chunks[0].height as usize;
        let offset = if self.state.selected_index + 1 > height {
            self.state.selected_index + 1 - height
        } else {
            0
        };

        let items: Vec<ListItem> = self
            .snapshots
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, snap)| {
                let selected = i == self.state.selected_index;
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let indicator = if selected { "▶ " } else { "  " };
                let line = format!(
                    "{}{:<5} {:<7} {:<19} {}",
                    indicator,
                    snap.number,
                    snap.kind.as_str(),
                    snap.date_display(self.date_format),
                    snap.description
                );
                ListItem::new(line).style(style)
            })
            .collect();

        List::new(items).render(chunks[0], buf);

        let footer = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::styled(" Pick  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
            .render(chunks[1], buf);
    }
}
