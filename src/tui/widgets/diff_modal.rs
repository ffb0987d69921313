//! File diff modal
//!
//! Large centered overlay showing the diff text for one modified file,
//! scrollable line by line or page by page.

use crate::app::state::FileDiffModalState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

pub struct DiffModal<'a> {
    state: &'a FileDiffModalState,
}

impl<'a> DiffModal<'a> {
    pub fn new(state: &'a FileDiffModalState) -> Self {
        Self { state }
    }

    /// Style one diff line: added green, removed red, hunk headers cyan
    fn line_style(line: &str) -> Style {
        if line.starts_with('+') {
            Style::default().fg(Color::Green)
        } else if line.starts_with('-') {
            Style::default().fg(Color::Red)
        } else if line.starts_with("@@") {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        }
    }
}

impl Widget for DiffModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(86, 84, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.state.path))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_set(symbols::border::ROUNDED);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).split(inner);

        let lines: Vec<Line> = self
            .state
            .content
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Self::line_style(line))))
            .collect();
        let total = lines.len();

        Paragraph::new(lines)
            .scroll((self.state.scroll as u16, 0))
            .render(chunks[0], buf);

        let position = format!("{}/{}", (self.state.scroll + 1).min(total.max(1)), total);
        let footer = Line::from(vec![
            Span::styled(position, Style::default().fg(Color::Gray)),
            Span::styled("  ", Style::default()),
            Span::styled("[↑/↓]", Style::default().fg(Color::Yellow)),
            Span::styled(" Scroll  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[PgUp/PgDn]", Style::default().fg(Color::Yellow)),
            Span::styled(" Page  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::styled(" Close", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
            .render(chunks[1], buf);
    }
}
