//! Application state (Model in TEA pattern)

use std::collections::{HashMap, HashSet};

use crate::config::Settings;
use crate::core::{DiffResult, DiffSection, Snapshot, SnapshotConfig, SnapshotGroup};
use crate::snapper::ToolAvailability;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Initial listing in flight
    #[default]
    Loading,

    /// Snapshot dashboard with configs panel and snapshot table
    Dashboard,

    /// Rollback action menu overlay for the selected row
    ActionMenu,

    /// Two-step snapshot picker for an arbitrary comparison
    CompareDialog,

    /// Full-screen diff page for a chosen snapshot pair
    ComparePage,
}

/// Which diff view instance a fetch or completion refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffTarget {
    /// Embedded view of an expanded dashboard row, keyed by row key
    Row { key: String },

    /// The standalone compare page
    ComparePage,
}

/// One line of a rendered diff view, in visual order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffItem {
    /// Collapsible section header
    Header(DiffSection),

    /// Entry at `index` within a section
    Entry(DiffSection, usize),
}

/// State of a single diff view (one expanded row, or the compare page)
#[derive(Debug, Clone, Default)]
pub struct DiffViewState {
    /// Identifiers of the compared snapshots
    pub pre: u64,
    pub post: u64,

    /// Parsed comparison result. `None` while a fetch is in flight.
    pub result: Option<DiffResult>,

    /// Set of open accordion sections. Sections start collapsed.
    pub open_sections: HashSet<DiffSection>,

    /// Cursor position within the flattened visible items
    pub cursor: usize,

    /// Fetch-generation counter.
    ///
    /// Incremented by [`Self::begin_fetch`]; completions carry the generation
    /// of the fetch that produced them and are discarded on mismatch, so a
    /// response for an older (pre, post) can never overwrite state seeded by
    /// a newer request.
    pub generation: u64,
}

impl DiffViewState {
    pub fn new(pre: u64, post: u64) -> Self {
        Self {
            pre,
            post,
            ..Self::default()
        }
    }

    /// Start a new fetch: bump the generation and return to loading state.
    ///
    /// Returns the new generation for stamping the dispatched task.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.result = None;
        self.open_sections.clear();
        self.cursor = 0;
        self.generation
    }

    /// Point this instance at a different pair (compare page reuse)
    pub fn reseed(&mut self, pre: u64, post: u64) {
        self.pre = pre;
        self.post = post;
    }

    pub fn is_loading(&self) -> bool {
        self.result.is_none()
    }

    /// Toggle open/closed for a section
    pub fn toggle_section(&mut self, section: DiffSection) {
        if !self.open_sections.remove(&section) {
            self.open_sections.insert(section);
        }
        self.clamp_cursor();
    }

    pub fn is_open(&self, section: DiffSection) -> bool {
        self.open_sections.contains(&section)
    }

    /// Flat list of visible lines: one header per non-empty section, plus
    /// the entries of open sections
    pub fn visible_items(&self) -> Vec<DiffItem> {
        let Some(result) = &self.result else {
            return vec![];
        };
        let mut items = Vec::new();
        for section in result.populated_sections() {
            items.push(DiffItem::Header(section));
            if self.is_open(section) {
                for index in 0..result.section_len(section) {
                    items.push(DiffItem::Entry(section, index));
                }
            }
        }
        items
    }

    /// The item under the cursor
    pub fn cursor_item(&self) -> Option<DiffItem> {
        self.visible_items().get(self.cursor).copied()
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let count = self.visible_items().len();
        if count > 0 && self.cursor < count - 1 {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let count = self.visible_items().len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }
}

/// Which part of the dashboard receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardFocus {
    #[default]
    Table,

    /// The embedded diff panel of the selected, expanded row
    DiffPanel,
}

/// State of the dashboard screen
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Index of the selected row in the paired listing
    pub selected_index: usize,

    /// Row keys whose diff panel is expanded
    pub expanded: HashSet<String>,

    /// Diff view instances for rows that have been expanded at least once.
    ///
    /// Collapsing a row hides its panel but keeps the instance, so
    /// re-expanding does not refetch.
    pub row_diffs: HashMap<String, DiffViewState>,

    /// Navigation focus
    pub focus: DashboardFocus,

    /// Whether a listing fetch is in flight
    pub loading: bool,

    /// Whether the last listing attempt failed
    pub load_error: bool,
}

impl DashboardState {
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn toggle_expanded(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
    }

    /// Drop expansion state and instances for rows no longer in the listing
    pub fn prune_rows(&mut self, groups: &[SnapshotGroup]) {
        let keys: HashSet<String> = groups.iter().map(|g| g.key()).collect();
        self.expanded.retain(|k| keys.contains(k));
        self.row_diffs.retain(|k, _| keys.contains(k));
    }
}

/// A rollback entry in the action menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackEntry {
    pub label: String,
    pub number: u64,
}

/// State of the rollback action menu overlay
#[derive(Debug, Default)]
pub struct ActionMenuState {
    pub entries: Vec<RollbackEntry>,
    pub selected_index: usize,
}

impl ActionMenuState {
    /// Build the menu for a row: two entries for a pair, one for a single
    pub fn for_group(group: &SnapshotGroup) -> Self {
        let entries = match group {
            SnapshotGroup::Pair { pre, post } => vec![
                RollbackEntry {
                    label: format!("Rollback to pre ({})", pre.number),
                    number: pre.number,
                },
                RollbackEntry {
                    label: format!("Rollback to post ({})", post.number),
                    number: post.number,
                },
            ],
            SnapshotGroup::Single(snapshot) => vec![RollbackEntry {
                label: format!("Rollback to snapshot ({})", snapshot.number),
                number: snapshot.number,
            }],
        };
        Self {
            entries,
            selected_index: 0,
        }
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.entries.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.entries.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    pub fn selected(&self) -> Option<&RollbackEntry> {
        self.entries.get(self.selected_index)
    }
}

/// State of the two-step compare dialog
#[derive(Debug)]
pub struct CompareDialogState {
    /// Index of the highlighted snapshot in the full listing
    pub selected_index: usize,

    /// Number picked in the first step, if any
    pub first: Option<u64>,

    /// Mode to return to when the dialog is cancelled
    pub return_mode: UiMode,
}

impl CompareDialogState {
    pub fn new(return_mode: UiMode) -> Self {
        Self {
            selected_index: 0,
            first: None,
            return_mode,
        }
    }

    pub fn select_next(&mut self, count: usize) {
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn select_previous(&mut self, count: usize) {
        if count > 0 {
            self.selected_index = if self.selected_index == 0 {
                count - 1
            } else {
                self.selected_index - 1
            };
        }
    }
}

/// State of the file-diff text modal
#[derive(Debug, Clone)]
pub struct FileDiffModalState {
    /// File path shown as the modal title
    pub path: String,

    /// Verbatim diff text
    pub content: String,

    /// Top visible line
    pub scroll: usize,

    line_count: usize,
}

impl FileDiffModalState {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let line_count = content.lines().count();
        Self {
            path: path.into(),
            content,
            scroll: 0,
            line_count,
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll = self.scroll.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max = self.line_count.saturating_sub(1);
        self.scroll = (self.scroll + amount).min(max);
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub mode: UiMode,

    /// Loaded settings
    pub settings: Settings,

    /// The snapper configuration being listed
    pub config_name: String,

    /// All snapper configurations
    pub configs: Vec<SnapshotConfig>,

    /// Raw snapshot listing (compare dialog picks from this)
    pub snapshots: Vec<Snapshot>,

    /// Paired listing backing the snapshot table
    pub groups: Vec<SnapshotGroup>,

    /// Dashboard screen state
    pub dashboard: DashboardState,

    /// Action menu overlay, present in ActionMenu mode
    pub action_menu: Option<ActionMenuState>,

    /// Compare dialog overlay, present in CompareDialog mode
    pub compare_dialog: Option<CompareDialogState>,

    /// Diff instance of the compare page, created on first comparison
    pub compare_page: Option<DiffViewState>,

    /// File-diff modal overlay. Routed input while open, over any mode.
    pub file_diff_modal: Option<FileDiffModalState>,

    /// External tool availability, probed once at startup
    pub tools: ToolAvailability,

    /// Tick counter driving the loading spinner
    pub tick_count: u64,

    quitting: bool,
}

impl AppState {
    pub fn new(settings: Settings, config_name: impl Into<String>) -> Self {
        Self {
            mode: UiMode::Loading,
            settings,
            config_name: config_name.into(),
            configs: Vec::new(),
            snapshots: Vec::new(),
            groups: Vec::new(),
            dashboard: DashboardState::default(),
            action_menu: None,
            compare_dialog: None,
            compare_page: None,
            file_diff_modal: None,
            tools: ToolAvailability::default(),
            tick_count: 0,
            quitting: false,
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    /// The row under the dashboard selection
    pub fn selected_group(&self) -> Option<&SnapshotGroup> {
        self.groups.get(self.dashboard.selected_index)
    }

    /// Diff instance for a target, if it exists
    pub fn diff_mut(&mut self, target: &DiffTarget) -> Option<&mut DiffViewState> {
        match target {
            DiffTarget::Row { key } => self.dashboard.row_diffs.get_mut(key),
            DiffTarget::ComparePage => self.compare_page.as_mut(),
        }
    }

    /// The diff instance that currently has navigation focus
    pub fn focused_diff_mut(&mut self) -> Option<&mut DiffViewState> {
        match self.mode {
            UiMode::ComparePage => self.compare_page.as_mut(),
            UiMode::Dashboard if self.dashboard.focus == DashboardFocus::DiffPanel => {
                let key = self.selected_group()?.key();
                if self.dashboard.is_expanded(&key) {
                    self.dashboard.row_diffs.get_mut(&key)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// The expanded diff instance shown under the selected dashboard row
    pub fn visible_row_diff(&self) -> Option<&DiffViewState> {
        let key = self.selected_group()?.key();
        if self.dashboard.is_expanded(&key) {
            self.dashboard.row_diffs.get(&key)
        } else {
            None
        }
    }

    /// Clamp the dashboard selection after the listing changed
    pub fn clamp_selection(&mut self) {
        if self.groups.is_empty() {
            self.dashboard.selected_index = 0;
        } else if self.dashboard.selected_index >= self.groups.len() {
            self.dashboard.selected_index = self.groups.len() - 1;
        }
    }
}
