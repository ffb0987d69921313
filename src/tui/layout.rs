//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Minimum terminal width for full status bar display
pub const MIN_FULL_STATUS_WIDTH: u16 = 60;

/// Screen areas for the dashboard layout
pub struct ScreenAreas {
    pub header: Rect,
    pub configs: Option<Rect>,
    pub table: Rect,
    pub diff: Option<Rect>,
    pub status: Rect,
}

/// Create the dashboard layout
///
/// The configs panel appears once the config list is loaded; the diff
/// panel takes the lower half of the body while an expanded row is
/// showing its changes.
pub fn dashboard(area: Rect, config_count: usize, show_diff: bool) -> ScreenAreas {
    let configs_height = if config_count == 0 {
        0
    } else {
        (config_count as u16).min(3) + 2
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),              // Header
        Constraint::Length(configs_height), // Configs panel
        Constraint::Min(5),                 // Body
        Constraint::Length(2),              // Status bar (border + content)
    ])
    .split(area);

    let configs = (configs_height > 0).then_some(chunks[1]);

    let (table, diff) = if show_diff {
        let body = Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);
        (body[0], Some(body[1]))
    } else {
        (chunks[2], None)
    };

    ScreenAreas {
        header: chunks[0],
        configs,
        table,
        diff,
        status: chunks[3],
    }
}

/// Screen areas for the comparison page layout
pub struct CompareAreas {
    pub header: Rect,
    pub breadcrumb: Rect,
    pub diff: Rect,
    pub status: Rect,
}

/// Create the comparison page layout: breadcrumb line, then the diff
/// view fills the body
pub fn compare(area: Rect) -> CompareAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(1), // Breadcrumb
        Constraint::Min(5),    // Diff view
        Constraint::Length(2), // Status bar
    ])
    .split(area);

    CompareAreas {
        header: chunks[0],
        breadcrumb: chunks[1],
        diff: chunks[2],
        status: chunks[3],
    }
}

/// Check if we should use compact status bar
pub fn use_compact_status(area: Rect) -> bool {
    area.width < MIN_FULL_STATUS_WIDTH
}
