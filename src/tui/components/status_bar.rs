use crate::tui::app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBarWidget<'a> {
    app_state: &'a AppState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let app = self.app_state;
        let tab = app.tabs.active();
        let (row, col) = app.input.cursor();

        let mut spans = vec![
            Span::styled(
                format!(" {} ", tab.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("Ln {}, Col {}  {} lines", row + 1, col + 1, tab.line_count())),
        ];

        if app.dispatcher.is_executing() {
            spans.push(Span::styled(
                "  Executing...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if app.dispatcher.is_injecting() {
            spans.push(Span::styled(
                "  Injecting...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        spans.push(Span::styled(
            "  ^N new  ^W close  ^S save  ^Y copy  ^R run  ^J inject  ^Q quit",
            Style::default().fg(Color::DarkGray),
        ));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
