//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Header widget displaying app title, active config, and shortcuts
pub struct Header<'a> {
    config_name: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(config_name: &'a str) -> Self {
        Self { config_name }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::DarkGray);
        let key = Style::default().fg(Color::Yellow);

        let content = Line::from(vec![
            Span::styled(" Snapdeck", title),
            Span::styled(format!("  ({})", self.config_name), dim),
            Span::raw("   "),
            Span::styled("[", dim),
            Span::styled("Enter", key),
            Span::styled("] Expand  ", dim),
            Span::styled("[", dim),
            Span::styled("a", key),
            Span::styled("] Actions  ", dim),
            Span::styled("[", dim),
            Span::styled("c", key),
            Span::styled("] Compare  ", dim),
            Span::styled("[", dim),
            Span::styled("r", key),
            Span::styled("] Refresh  ", dim),
            Span::styled("[", dim),
            Span::styled("q", key),
            Span::styled("] Quit", dim),
        ]);

        Paragraph::new(content)
            .block(Block::default().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}
