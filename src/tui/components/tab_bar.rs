use crate::editor::{Tab, TabId, TabManager};
use crate::tui::app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

pub fn tab_label(tab: &Tab) -> String {
    if tab.saved {
        format!(" {} ", tab.name)
    } else {
        format!(" {} * ", tab.name)
    }
}

/// Which tab a click at `column` lands on, mirroring the rendered label
/// widths. Returns None for the gaps and the trailing new-tab button.
pub fn hit_test(tabs: &TabManager, origin_x: u16, column: u16) -> Option<TabId> {
    let mut x = origin_x as usize;
    let column = column as usize;
    for tab in tabs.tabs() {
        let width = tab_label(tab).width();
        if (x..x + width).contains(&column) {
            return Some(tab.id);
        }
        // Separator between labels.
        x += width + 1;
    }
    None
}

pub struct TabBarWidget<'a> {
    app_state: &'a AppState,
}

impl<'a> TabBarWidget<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }
}

impl<'a> Widget for TabBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let active = self.app_state.tabs.active_id();
        let mut spans = Vec::new();

        for tab in self.app_state.tabs.tabs() {
            let style = if tab.id == active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(tab_label(tab), style));
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(" + ", Style::default().fg(Color::DarkGray)));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_maps_columns_to_tabs() {
        let mut tabs = TabManager::new();
        let first = tabs.active_id();
        let second = tabs.create();

        // " New Script " is 12 columns wide, then a 1-column separator.
        assert_eq!(hit_test(&tabs, 0, 0), Some(first));
        assert_eq!(hit_test(&tabs, 0, 11), Some(first));
        assert_eq!(hit_test(&tabs, 0, 12), None);
        assert_eq!(hit_test(&tabs, 0, 13), Some(second));
    }

    #[test]
    fn unsaved_tabs_are_marked() {
        let mut tabs = TabManager::new();
        let id = tabs.active_id();
        tabs.update_content(id, "x".to_string());
        assert!(tab_label(tabs.active()).contains('*'));
    }
}
