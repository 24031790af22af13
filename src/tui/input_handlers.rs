use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::app::{AppEvent, AppState};

pub enum KeyHandlerResult {
    Handled,
    NotHandled,
    ShouldQuit,
}

/// The unsaved-changes dialog swallows every key until the user decides.
pub fn handle_confirm_keys(key: KeyCode, app: &mut AppState) -> KeyHandlerResult {
    if app.pending_close.is_none() {
        return KeyHandlerResult::NotHandled;
    }

    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.resolve_close(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.resolve_close(false),
        _ => {}
    }
    KeyHandlerResult::Handled
}

/// Suggestion navigation. Arrow, accept and cancel keys are consumed here
/// while the overlay is visible so they never reach the textarea.
pub fn handle_completion_keys(key: KeyCode, app: &mut AppState) -> KeyHandlerResult {
    if !app.completion.is_visible() {
        return KeyHandlerResult::NotHandled;
    }

    match key {
        KeyCode::Up => {
            app.completion.select_prev();
            KeyHandlerResult::Handled
        }
        KeyCode::Down => {
            app.completion.select_next();
            KeyHandlerResult::Handled
        }
        KeyCode::Tab | KeyCode::Enter => {
            let text = app.input_text();
            let caret = app.caret_offset();
            if let Some(acceptance) = app.completion.accept(&text, caret) {
                app.apply_acceptance(acceptance);
            }
            KeyHandlerResult::Handled
        }
        KeyCode::Esc => {
            app.completion.cancel();
            KeyHandlerResult::Handled
        }
        _ => KeyHandlerResult::NotHandled,
    }
}

/// Editor shortcuts and plain typing.
pub fn handle_editor_keys(
    key: KeyEvent,
    app: &mut AppState,
    tx: &mpsc::UnboundedSender<AppEvent>,
) -> KeyHandlerResult {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') => return KeyHandlerResult::ShouldQuit,
            KeyCode::Char('n') => {
                app.new_tab();
                return KeyHandlerResult::Handled;
            }
            KeyCode::Char('w') => {
                app.request_close_active();
                return KeyHandlerResult::Handled;
            }
            KeyCode::Char('s') => {
                app.save_active();
                return KeyHandlerResult::Handled;
            }
            KeyCode::Char('y') => {
                app.copy_active();
                return KeyHandlerResult::Handled;
            }
            KeyCode::Char('r') => {
                app.start_execute(tx);
                return KeyHandlerResult::Handled;
            }
            KeyCode::Char('j') => {
                app.start_inject(tx);
                return KeyHandlerResult::Handled;
            }
            _ => {}
        }
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        match key.code {
            KeyCode::Right => {
                app.next_tab();
                return KeyHandlerResult::Handled;
            }
            KeyCode::Left => {
                app.prev_tab();
                return KeyHandlerResult::Handled;
            }
            _ => {}
        }
    }

    let modified = app.input.input(key);
    if modified {
        app.commit_input();
        app.refresh_completion();
    }
    KeyHandlerResult::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyEvent;

    fn app_with(text: &str) -> AppState {
        let mut app = AppState::new(&AppConfig::default());
        for ch in text.chars() {
            app.input.input(KeyEvent::from(KeyCode::Char(ch)));
        }
        app.commit_input();
        app.refresh_completion();
        app
    }

    #[test]
    fn arrows_are_swallowed_while_suggestions_visible() {
        let mut app = app_with("fo");
        assert!(app.completion.is_visible());
        let caret = app.caret_offset();

        assert!(matches!(
            handle_completion_keys(KeyCode::Down, &mut app),
            KeyHandlerResult::Handled
        ));
        // The caret did not move; the key only changed the selection.
        assert_eq!(app.caret_offset(), caret);
        assert_eq!(app.completion.session().unwrap().selected, 1);
    }

    #[test]
    fn keys_pass_through_when_hidden() {
        let mut app = app_with("");
        assert!(matches!(
            handle_completion_keys(KeyCode::Down, &mut app),
            KeyHandlerResult::NotHandled
        ));
    }

    #[test]
    fn tab_and_enter_both_accept() {
        for key in [KeyCode::Tab, KeyCode::Enter] {
            let mut app = app_with("fo");
            assert!(matches!(
                handle_completion_keys(key, &mut app),
                KeyHandlerResult::Handled
            ));
            assert_eq!(app.input_text(), "for");
            assert!(!app.completion.is_visible());
        }
    }

    #[test]
    fn escape_cancels_without_editing() {
        let mut app = app_with("fo");
        handle_completion_keys(KeyCode::Esc, &mut app);
        assert!(!app.completion.is_visible());
        assert_eq!(app.input_text(), "fo");
    }

    #[test]
    fn confirm_dialog_swallows_unrelated_keys() {
        let mut app = app_with("x");
        app.request_close_active();
        assert!(app.pending_close.is_some());

        assert!(matches!(
            handle_confirm_keys(KeyCode::Char('z'), &mut app),
            KeyHandlerResult::Handled
        ));
        assert!(app.pending_close.is_some());

        handle_confirm_keys(KeyCode::Char('n'), &mut app);
        assert!(app.pending_close.is_none());
        assert_eq!(app.input_text(), "x");
    }
}
