//! Ordered, de-duplicated set of open tab names.

use super::START_PAGE;

/// Open workspace tabs in tab-bar order plus the active one.
///
/// Invariants: the default tab is always present, names are unique and the
/// active tab is always a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry {
    tabs: Vec<String>,
    active: String,
    default_tab: String,
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new(START_PAGE)
    }
}

impl TabRegistry {
    pub fn new(default_tab: &str) -> Self {
        Self {
            tabs: vec![default_tab.to_string()],
            active: default_tab.to_string(),
            default_tab: default_tab.to_string(),
        }
    }

    /// Appends `name` if missing and makes it active.
    ///
    /// Returns `true` if the tab was newly added.
    pub fn open(&mut self, name: &str) -> bool {
        let added = !self.contains(name);
        if added {
            self.tabs.push(name.to_string());
        }
        self.active = name.to_string();
        added
    }

    /// Removes `name`. The default tab cannot be closed.
    ///
    /// If the closed tab was active, the default tab becomes active.
    pub fn close(&mut self, name: &str) -> bool {
        if name == self.default_tab {
            return false;
        }
        let Some(pos) = self.position(name) else {
            return false;
        };
        self.tabs.remove(pos);
        if self.active == name {
            self.active = self.default_tab.clone();
        }
        true
    }

    /// Makes `name` active if it is open.
    pub fn activate(&mut self, name: &str) -> bool {
        if !self.contains(name) {
            return false;
        }
        self.active = name.to_string();
        true
    }

    /// Collapses to the default tab and activates it.
    pub fn reset_to_default(&mut self) {
        self.tabs.clear();
        self.tabs.push(self.default_tab.clone());
        self.active = self.default_tab.clone();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t == name)
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn active_index(&self) -> usize {
        self.position(&self.active).unwrap_or(0)
    }

    pub fn default_tab(&self) -> &str {
        &self.default_tab
    }

    pub fn is_closable(&self, name: &str) -> bool {
        name != self.default_tab && self.contains(name)
    }

    /// Name of the tab after the active one (wrapping).
    pub fn next_name(&self) -> &str {
        let idx = (self.active_index() + 1) % self.tabs.len();
        &self.tabs[idx]
    }

    /// Name of the tab before the active one (wrapping).
    pub fn prev_name(&self) -> &str {
        let len = self.tabs.len();
        let idx = (self.active_index() + len - 1) % len;
        &self.tabs[idx]
    }
}
