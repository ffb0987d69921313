//! Diff accordion widget
//!
//! Renders the changes between a snapshot pair as collapsible sections:
//! four package buckets and three file buckets, all starting collapsed.
//! Modified files carrying diff text render as activatable entries.

use crate::app::state::{DiffItem, DiffViewState};
use crate::core::DiffSection;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, List, ListItem, Paragraph, Widget},
};

pub struct DiffView<'a> {
    diff: &'a DiffViewState,
    focused: bool,
    tick: u64,
}

impl<'a> DiffView<'a> {
    pub fn new(diff: &'a DiffViewState, focused: bool, tick: u64) -> Self {
        Self {
            diff,
            focused,
            tick,
        }
    }

    /// Bouncing progress ratio for the loading gauge (2s round trip at 20 FPS)
    fn indeterminate_ratio(&self) -> f64 {
        let cycle_length = 40;
        let position = self.tick % cycle_length;
        let half = cycle_length / 2;
        if position < half {
            position as f64 / half as f64
        } else {
            (cycle_length - position) as f64 / half as f64
        }
    }

    fn render_loading(&self, inner: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Text
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new("Loading changes...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .render(chunks[1], buf);

        let gauge_area = Rect {
            x: chunks[2].x.saturating_add(4),
            y: chunks[2].y,
            width: chunks[2].width.saturating_sub(8),
            height: 1,
        };
        LineGauge::default()
            .ratio(self.indeterminate_ratio())
            .filled_style(Style::default().fg(Color::Cyan))
            .unfilled_style(Style::default().fg(Color::Black))
            .filled_symbol(symbols::line::THICK.horizontal)
            .unfilled_symbol(symbols::line::NORMAL.horizontal)
            .render(gauge_area, buf);
    }

    fn render_empty(&self, inner: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
        Paragraph::new("No changes found")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[1], buf);
    }

    fn item_line(&self, item: DiffItem) -> Line<'static> {
        let result = match self.diff.result.as_ref() {
            Some(result) => result,
            None => return Line::default(),
        };

        match item {
            DiffItem::Header(section) => {
                let arrow = if self.diff.is_open(section) {
                    "▾"
                } else {
                    "▸"
                };
                Line::from(Span::styled(
                    format!("{} {} ({})", arrow, section.title(), result.section_len(section)),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            }
            DiffItem::Entry(section, index) => {
                let text = result.entry_text(section, index).unwrap_or_default();
                let activatable = result
                    .modified_file(section, index)
                    .is_some_and(|file| file.file_diff.is_some());
                if activatable {
                    Line::from(Span::styled(
                        format!("    {}", text),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::UNDERLINED),
                    ))
                } else {
                    Line::from(Span::raw(format!("    {}", text)))
                }
            }
        }
    }

    fn render_items(&self, inner: Rect, buf: &mut Buffer) {
        let items = self.diff.visible_items();
        let height = inner.height as usize;

        // Keep the cursor in view
        let offset = if self.focused && self.diff.cursor + 1 > height {
            self.diff.cursor + 1 - height
        } else {
            0
        };

        let cursor_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let list_items: Vec<ListItem> = items
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, item)| {
                let line = self.item_line(*item);
                if self.focused && i == self.diff.cursor {
                    ListItem::new(line).style(cursor_style)
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        List::new(list_items).render(inner, buf);
    }
}

impl Widget for DiffView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Changes {} → {} ", self.diff.pre, self.diff.post));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.diff.is_loading() {
            self.render_loading(inner, buf);
            return;
        }

        let empty = self
            .diff
            .result
            .as_ref()
            .is_some_and(|result| result.is_empty());
        if empty {
            self.render_empty(inner, buf);
        } else {
            self.render_items(inner, buf);
        }
    }
}
