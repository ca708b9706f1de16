//! View-local UI state: focus, cursors and popups.
//!
//! Session data lives in the store; nothing here affects the simulation.

/// Ribbon page selected in the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RibbonTab {
    #[default]
    Home,
    Migration,
    Integrity,
    View,
}

impl RibbonTab {
    pub fn all() -> &'static [RibbonTab] {
        &[
            RibbonTab::Home,
            RibbonTab::Migration,
            RibbonTab::Integrity,
            RibbonTab::View,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RibbonTab::Home => "Home",
            RibbonTab::Migration => "Migration",
            RibbonTab::Integrity => "Integrity",
            RibbonTab::View => "View",
        }
    }
}

/// Pane receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Workspace,
    Explorer,
}

/// Active popup. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Popup {
    #[default]
    None,
    /// Connection dialog with the cloud replication checkbox.
    Connect { aws_enabled: bool },
    QuitConfirm,
    Help { scroll: usize },
    /// Blocking notification (e.g. "Please connect first!").
    Alert(String),
}

impl Popup {
    pub fn is_open(&self) -> bool {
        !matches!(self, Popup::None)
    }
}

/// UI state owned by the app loop.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub ribbon: RibbonTab,
    pub focus: Focus,
    pub popup: Popup,
    /// Row index into the visible explorer nodes.
    pub explorer_cursor: usize,
    /// Log lines scrolled up from the tail; 0 follows new entries.
    pub log_scroll: usize,
    /// Rows scrolled up from the newest row of a feed; 0 follows new rows.
    pub feed_scroll: usize,
    pub dead_letter_selected: usize,
    pub settings_cursor: usize,
    /// One-shot hint shown in the status bar.
    pub status_message: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets per-view scroll positions when the active tab changes.
    pub fn reset_scroll(&mut self) {
        self.log_scroll = 0;
        self.feed_scroll = 0;
    }
}
