//! Workspace tabs: registry of open tabs and the view each one shows.

mod registry;

pub use registry::TabRegistry;

/// Tab shown at start-up and after disconnecting. Never closable.
pub const START_PAGE: &str = "Start Page";
/// Tab opened automatically on connect.
pub const MONITOR_TAB: &str = "Monitor: PG -> Mongo -> AWS";
pub const DEAD_LETTER_TAB: &str = "Dead Letter Queue";
pub const SETTINGS_TAB: &str = "Configuration";

/// Content rendered by a workspace tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceView {
    Start,
    Monitor,
    /// Live row feed of a table or view from the explorer.
    Object { node_id: String, title: String },
    DeadLetters,
    Settings,
}

impl WorkspaceView {
    /// Tab name; doubles as the tab's identity.
    pub fn tab_name(&self) -> String {
        match self {
            WorkspaceView::Start => START_PAGE.to_string(),
            WorkspaceView::Monitor => MONITOR_TAB.to_string(),
            WorkspaceView::Object { title, .. } => title.clone(),
            WorkspaceView::DeadLetters => DEAD_LETTER_TAB.to_string(),
            WorkspaceView::Settings => SETTINGS_TAB.to_string(),
        }
    }

    /// Views that only make sense while connected.
    pub fn requires_connection(&self) -> bool {
        matches!(self, WorkspaceView::Monitor | WorkspaceView::Object { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_names() {
        assert_eq!(WorkspaceView::Start.tab_name(), START_PAGE);
        assert_eq!(WorkspaceView::Monitor.tab_name(), MONITOR_TAB);
        let obj = WorkspaceView::Object {
            node_id: "t1".to_string(),
            title: "Table: users".to_string(),
        };
        assert_eq!(obj.tab_name(), "Table: users");
        assert!(obj.requires_connection());
        assert!(!WorkspaceView::Settings.requires_connection());
    }
}
