use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the line-number gutter, including its trailing space.
pub const GUTTER_WIDTH: u16 = 5;

/// Screen regions for one frame. Recomputed per draw; the event loop keeps
/// the last copy for mouse hit testing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppLayout {
    pub tab_bar: Rect,
    pub gutter: Rect,
    pub text: Rect,
    pub panel: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect, panel_visible: bool) -> Self {
        let panel_height = if panel_visible { 3 } else { 0 };
        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(panel_height),
            Constraint::Length(1),
        ]);
        let [tab_bar, editor, panel, status] = vertical.areas(area);

        let horizontal =
            Layout::horizontal([Constraint::Length(GUTTER_WIDTH), Constraint::Min(1)]);
        let [gutter, text] = horizontal.areas(editor);

        Self {
            tab_bar,
            gutter,
            text,
            panel,
            status,
        }
    }
}
