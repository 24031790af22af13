use super::tab::{Tab, TabId};

pub const DEFAULT_TAB_NAME: &str = "New Script";

/// Result of a close request. Closing an unsaved tab requires an explicit
/// confirmation from the caller; the manager never discards edits on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was removed.
    Closed,
    /// The tab was the only one; it was replaced with a fresh empty tab.
    Reset,
    /// The tab has unsaved changes. Call `close_confirmed` to proceed.
    ConfirmClose { id: TabId, name: String },
}

/// Owns the ordered set of open tabs and the active selection.
///
/// Invariants: the set is never empty, and the active id always resolves to a
/// member of the set (resolution falls back to the first tab).
#[derive(Debug)]
pub struct TabManager {
    tabs: Vec<Tab>,
    active_id: TabId,
    next_id: TabId,
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManager {
    pub fn new() -> Self {
        let mut manager = Self {
            tabs: Vec::new(),
            active_id: 0,
            next_id: 1,
        };
        let id = manager.push_tab(DEFAULT_TAB_NAME.to_string(), String::new(), None);
        manager.active_id = id;
        manager
    }

    fn push_tab(&mut self, name: String, content: String, origin: Option<String>) -> TabId {
        let id = self.next_id;
        self.next_id += 1;
        self.tabs.push(Tab::new(id, name, content, origin));
        id
    }

    /// Open a fresh empty tab and make it active. The name is derived from the
    /// current tab count, so duplicates are possible after closes.
    pub fn create(&mut self) -> TabId {
        let name = format!("Script {}", self.tabs.len() + 1);
        let id = self.push_tab(name, String::new(), None);
        self.active_id = id;
        id
    }

    /// Open a tab seeded from an external source. The content reflects a saved
    /// file, so the tab starts clean.
    pub fn open(&mut self, name: &str, content: String) -> TabId {
        let id = self.push_tab(name.to_string(), content, Some(name.to_string()));
        self.active_id = id;
        id
    }

    pub fn close(&mut self, id: TabId) -> CloseOutcome {
        match self.tabs.iter().find(|tab| tab.id == id) {
            Some(tab) if !tab.saved => CloseOutcome::ConfirmClose {
                id,
                name: tab.name.clone(),
            },
            Some(_) => self.close_confirmed(id),
            None => CloseOutcome::Closed,
        }
    }

    /// Close without the unsaved-changes check. Closing the last tab resets the
    /// manager to a single fresh tab instead of leaving the set empty.
    pub fn close_confirmed(&mut self, id: TabId) -> CloseOutcome {
        let Some(index) = self.tabs.iter().position(|tab| tab.id == id) else {
            return CloseOutcome::Closed;
        };

        if self.tabs.len() == 1 {
            self.tabs.clear();
            let fresh = self.push_tab(DEFAULT_TAB_NAME.to_string(), String::new(), None);
            self.active_id = fresh;
            return CloseOutcome::Reset;
        }

        self.tabs.remove(index);
        if self.active_id == id {
            // The tail of the remaining sequence takes over.
            if let Some(last) = self.tabs.last() {
                self.active_id = last.id;
            }
        }
        CloseOutcome::Closed
    }

    /// No-op when the id does not exist.
    pub fn set_active(&mut self, id: TabId) {
        if self.tabs.iter().any(|tab| tab.id == id) {
            self.active_id = id;
        }
    }

    pub fn active(&self) -> &Tab {
        self.tabs
            .iter()
            .find(|tab| tab.id == self.active_id)
            .unwrap_or(&self.tabs[0])
    }

    pub fn active_id(&self) -> TabId {
        self.active().id
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Replace the tab's content. Marks the tab unsaved unconditionally, even
    /// when the new content equals the old.
    pub fn update_content(&mut self, id: TabId, content: String) {
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == id) {
            tab.content = content;
            tab.saved = false;
        }
    }

    pub fn mark_saved(&mut self, id: TabId) {
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == id) {
            tab.saved = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_clean_default_tab() {
        let manager = TabManager::new();
        assert_eq!(manager.tabs().len(), 1);
        let tab = manager.active();
        assert_eq!(tab.name, DEFAULT_TAB_NAME);
        assert!(tab.saved);
        assert!(tab.content.is_empty());
        assert!(tab.origin.is_none());
    }

    #[test]
    fn create_appends_and_activates() {
        let mut manager = TabManager::new();
        let id = manager.create();
        assert_eq!(manager.tabs().len(), 2);
        assert_eq!(manager.active_id(), id);
        assert_eq!(manager.active().name, "Script 2");
    }

    #[test]
    fn open_seeds_content_and_origin_clean() {
        let mut manager = TabManager::new();
        let id = manager.open("init.lua", "print(1)".to_string());
        let tab = manager.get(id).unwrap();
        assert_eq!(tab.name, "init.lua");
        assert_eq!(tab.content, "print(1)");
        assert_eq!(tab.origin.as_deref(), Some("init.lua"));
        assert!(tab.saved);
    }

    #[test]
    fn close_unsaved_requires_confirmation() {
        let mut manager = TabManager::new();
        let id = manager.create();
        manager.update_content(id, "x = 1".to_string());

        let outcome = manager.close(id);
        assert_eq!(
            outcome,
            CloseOutcome::ConfirmClose {
                id,
                name: "Script 2".to_string()
            }
        );
        // Declining leaves the tab in place.
        assert_eq!(manager.tabs().len(), 2);

        assert_eq!(manager.close_confirmed(id), CloseOutcome::Closed);
        assert_eq!(manager.tabs().len(), 1);
    }

    #[test]
    fn closing_sole_tab_resets_to_fresh_tab() {
        let mut manager = TabManager::new();
        let id = manager.active_id();
        manager.update_content(id, "dirty".to_string());

        assert_eq!(manager.close_confirmed(id), CloseOutcome::Reset);
        assert_eq!(manager.tabs().len(), 1);
        let tab = manager.active();
        assert_ne!(tab.id, id);
        assert_eq!(tab.name, DEFAULT_TAB_NAME);
        assert!(tab.saved);
        assert!(tab.content.is_empty());
    }

    #[test]
    fn closing_active_tab_activates_tail() {
        let mut manager = TabManager::new();
        let first = manager.active_id();
        let second = manager.create();
        let third = manager.create();

        manager.set_active(second);
        manager.close_confirmed(second);
        // Tail of the remaining ordered sequence, not the adjacent index.
        assert_eq!(manager.active_id(), third);

        manager.set_active(first);
        manager.close_confirmed(third);
        // Closing an inactive tab leaves the active selection alone.
        assert_eq!(manager.active_id(), first);
    }

    #[test]
    fn set_active_ignores_unknown_id() {
        let mut manager = TabManager::new();
        let id = manager.active_id();
        manager.set_active(9999);
        assert_eq!(manager.active_id(), id);
    }

    #[test]
    fn update_content_always_marks_unsaved() {
        let mut manager = TabManager::new();
        let id = manager.active_id();
        manager.update_content(id, String::new());
        // Same content as before, still marked unsaved.
        assert!(!manager.active().saved);

        manager.mark_saved(id);
        assert!(manager.active().saved);
    }

    #[test]
    fn set_never_empty_under_close_storm() {
        let mut manager = TabManager::new();
        for _ in 0..4 {
            manager.create();
        }
        let ids: Vec<TabId> = manager.tabs().iter().map(|tab| tab.id).collect();
        for id in ids {
            manager.close_confirmed(id);
            assert!(!manager.tabs().is_empty());
            let active = manager.active_id();
            assert!(manager.get(active).is_some());
        }
        assert_eq!(manager.tabs().len(), 1);
    }
}
