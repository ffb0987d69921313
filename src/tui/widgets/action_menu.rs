//! Action menu modal
//!
//! Centered overlay listing the rollback actions for the selected row:
//! two entries for a pair, one for a single snapshot.

use crate::app::state::ActionMenuState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
};

pub struct ActionMenu<'a> {
    state: &'a ActionMenuState,
}

impl<'a> ActionMenu<'a> {
    pub fn new(state: &'a ActionMenuState) -> Self {
        Self { state }
    }
}

impl Widget for ActionMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (self.state.entries.len() as u16) + 5;
        let width = 40.min(area.width);
        let modal_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height: height.min(area.height),
        };

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(" Actions ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(inner);

        let items: Vec<ListItem> = self
            .state
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
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
                ListItem::new(format!("{}{}", indicator, entry.label)).style(style)
            })
            .collect();

        List::new(items).render(chunks[0], buf);

        let footer = Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::styled(" Run  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::styled(" Cancel", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
            .render(chunks[1], buf);
    }
}
