use crate::tui::app::AppState;
use ratatui::text::Span;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Widget},
};

/// Suggestion overlay anchored just below the caret.
pub struct CompletionPopupWidget<'a> {
    app_state: &'a AppState,
}

impl<'a> CompletionPopupWidget<'a> {
    pub fn new(app_state: &'a AppState) -> Self {
        Self { app_state }
    }
}

impl<'a> Widget for CompletionPopupWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(session) = self.app_state.completion.session() else {
            return;
        };
        if session.candidates.is_empty() {
            return;
        }

        let editor = self.app_state.layout.text;
        let scroll = self.app_state.scroll.offset;

        // The anchor is in buffer coordinates (line below the caret, measured
        // column); shift it into the viewport.
        let anchor_row = session.anchor.top;
        if anchor_row < scroll {
            return;
        }
        let y = editor.y + (anchor_row - scroll).min(u16::MAX as usize) as u16;
        let x = editor
            .x
            .saturating_add(session.anchor.left.min(u16::MAX as usize) as u16);

        let items: Vec<ListItem> = session
            .candidates
            .iter()
            .enumerate()
            .map(|(index, suggestion)| {
                let is_selected = index == session.selected;
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let prefix = if is_selected { "> " } else { "  " };
                let mut spans = vec![
                    Span::raw(format!("{}{}", prefix, suggestion.label)),
                    Span::styled(
                        format!("  {}", suggestion.kind.display()),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ];
                if let Some(description) = suggestion.description {
                    spans.push(Span::styled(
                        format!("  {}", description),
                        Style::default().fg(Color::Gray),
                    ));
                }
                ListItem::new(Line::from(spans)).style(style)
            })
            .collect();

        let desired_height = session.candidates.len() as u16 + 2;
        let available_height = (area.y + area.height).saturating_sub(y);
        let popup_height = desired_height.min(available_height).max(3);

        let width = 44u16.min(area.width.saturating_sub(x));
        if width < 10 || popup_height < 3 {
            return;
        }

        let popup_area = Rect {
            x,
            y,
            width,
            height: popup_height,
        };

        let title = Span::styled(
            format!(" {} / {} ", session.selected + 1, session.candidates.len()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        // Clear the area first to prevent text bleed-through
        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        List::new(items).block(block).render(popup_area, buf);
    }
}
