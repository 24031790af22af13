use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

use super::app::{AppEvent, AppState};
use super::input_handlers::{
    handle_completion_keys, handle_confirm_keys, handle_editor_keys, KeyHandlerResult,
};
use super::layout::AppLayout;
use super::terminal::Tui;
use super::ui;

pub async fn run_event_loop(terminal: &mut Tui, app: &mut AppState) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    loop {
        // Apply finished dispatches before drawing.
        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::DispatchFinished { action, outcome } => {
                    app.finish_dispatch(action, outcome);
                }
            }
        }

        app.layout = AppLayout::compute(terminal.get_frame().area(), app.has_panel());
        app.update_scroll();
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for keyboard and mouse events
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Dialog first, then the suggestion overlay, then the editor.
                    match handle_confirm_keys(key.code, app) {
                        KeyHandlerResult::Handled => continue,
                        KeyHandlerResult::ShouldQuit => break,
                        KeyHandlerResult::NotHandled => {}
                    }
                    match handle_completion_keys(key.code, app) {
                        KeyHandlerResult::Handled => continue,
                        KeyHandlerResult::ShouldQuit => break,
                        KeyHandlerResult::NotHandled => {}
                    }
                    match handle_editor_keys(key, app, &tx) {
                        KeyHandlerResult::ShouldQuit => break,
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(_) = mouse.kind {
                        app.handle_click(mouse.column, mouse.row);
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
