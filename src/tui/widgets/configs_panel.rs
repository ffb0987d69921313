//! Snapper configs panel
//!
//! Small table listing the available snapper configs and their subvolumes,
//! with the active config highlighted.

use crate::core::SnapshotConfig;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, Widget},
};

pub struct ConfigsPanel<'a> {
    configs: &'a [SnapshotConfig],
    active: &'a str,
}

impl<'a> ConfigsPanel<'a> {
    pub fn new(configs: &'a [SnapshotConfig], active: &'a str) -> Self {
        Self { configs, active }
    }
}

impl Widget for ConfigsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Row> = self
            .configs
            .iter()
            .map(|config| {
                let style = if config.config == self.active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![config.config.clone(), config.subvolume.clone()]).style(style)
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
            .header(
                Row::new(vec!["Config", "Subvolume"]).style(Style::default().fg(Color::DarkGray)),
            )
            .block(Block::default().borders(Borders::ALL).title(" Configs "));

        table.render(area, buf);
    }
}
