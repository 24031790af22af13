use crate::tui::app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

/// The line-number gutter. It renders from the editor's scroll offset, so it
/// follows the text surface without any state of its own.
pub struct GutterWidget<'a> {
    app_state: &'a AppState,
}

impl<'a> GutterWidget<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }
}

impl<'a> Widget for GutterWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let offset = self.app_state.scroll.offset;
        let line_count = self.app_state.input.lines().len();
        let style = Style::default().fg(Color::DarkGray);

        let lines: Vec<Line> = (offset..line_count)
            .take(area.height as usize)
            .map(|index| Line::styled(format!("{:>4} ", index + 1), style))
            .collect();

        Paragraph::new(Text::from(lines)).render(area, buf);
    }
}

/// The highlighted text surface with a block cursor.
pub struct TextSurfaceWidget<'a> {
    app_state: &'a AppState,
}

impl<'a> TextSurfaceWidget<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }
}

impl<'a> Widget for TextSurfaceWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = self.app_state;
        let content = app.input_text();
        let lines = app.highlighter.highlight_lines(&content);
        let offset = app.scroll.offset;

        Paragraph::new(Text::from(lines))
            .scroll((offset as u16, 0))
            .render(area, buf);

        // Block cursor at the caret cell.
        let (cursor_row, _) = app.input.cursor();
        if cursor_row < offset {
            return;
        }
        let y = (cursor_row - offset) as u16;
        let x = app.cursor_display_col() as u16;
        if y < area.height && x < area.width {
            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
            }
        }
    }
}
