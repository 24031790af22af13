pub type TabId = u64;

/// One independently editable script buffer.
#[derive(Debug, Clone)]
pub struct Tab {
    /// Stable for the tab's lifetime, never reused within a manager.
    pub id: TabId,
    pub name: String,
    pub content: String,
    /// False whenever the content has been edited since load or last save.
    pub saved: bool,
    /// File name the tab was opened from, used as the save target.
    pub origin: Option<String>,
}

impl Tab {
    pub(super) fn new(id: TabId, name: String, content: String, origin: Option<String>) -> Self {
        Self {
            id,
            name,
            content,
            saved: true,
            origin,
        }
    }

    pub fn line_count(&self) -> usize {
        self.content.matches('\n').count() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_counts_newlines_plus_one() {
        let tab = Tab::new(1, "t".to_string(), String::new(), None);
        assert_eq!(tab.line_count(), 1);

        let tab = Tab::new(2, "t".to_string(), "a\nb\nc".to_string(), None);
        assert_eq!(tab.line_count(), 3);

        let tab = Tab::new(3, "t".to_string(), "a\n".to_string(), None);
        assert_eq!(tab.line_count(), 2);
    }
}
