use crate::tui::app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Blocking yes/no dialog shown before a dirty tab is closed.
pub struct ConfirmDialogWidget<'a> {
    app_state: &'a AppState,
}

impl<'a> ConfirmDialogWidget<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }
}

impl<'a> Widget for ConfirmDialogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(pending) = &self.app_state.pending_close else {
            return;
        };

        let lines = vec![
            Line::from(vec![
                Span::raw("The file "),
                Span::styled(
                    format!("\"{}\"", pending.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" has unsaved changes."),
            ]),
            Line::from("Do you want to close it anyway?"),
            Line::from(""),
            Line::from(Span::styled(
                "y/Enter close, n/Esc keep editing",
                Style::default().fg(Color::Cyan),
            )),
        ];

        let width = 48.min(area.width);
        let height = 6.min(area.height);
        let dialog_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(" Unsaved Changes ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(dialog_area, buf);
    }
}
