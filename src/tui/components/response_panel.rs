use crate::tui::app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shows the most recent dispatch outcome or file/clipboard notice. Cleared
/// when the next dispatch begins.
pub struct ResponsePanelWidget<'a> {
    app_state: &'a AppState,
}

impl<'a> ResponsePanelWidget<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }
}

impl<'a> Widget for ResponsePanelWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let app = self.app_state;

        let (title, text, color) = if let Some(error) = &app.last_error {
            (" Error ", error.as_str(), Color::Red)
        } else if let Some(response) = &app.last_response {
            (" Response ", response.as_str(), Color::Green)
        } else if let Some(notice) = &app.notice {
            (" Notice ", notice.as_str(), Color::Yellow)
        } else {
            return;
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        Paragraph::new(text)
            .style(Style::default().fg(color))
            .block(block)
            .render(area, buf);
    }
}
