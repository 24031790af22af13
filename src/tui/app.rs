use std::sync::Arc;
use tokio::sync::mpsc;
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::completion::{Acceptance, CellMetrics, CompletionEngine, LUAU_SUGGESTIONS};
use crate::config::AppConfig;
use crate::dispatch::{DispatchAction, DispatchClient, DispatchConfig, DispatchResult};
use crate::editor::{CloseOutcome, TabId, TabManager};
use crate::files;
use crate::highlight::{Grammar, Highlighter};

use super::layout::AppLayout;
use super::scroll_state::ScrollState;

/// Messages delivered back into the event loop from spawned dispatch tasks.
pub enum AppEvent {
    DispatchFinished {
        action: DispatchAction,
        outcome: DispatchResult<String>,
    },
}

/// A close request waiting on the user's yes/no decision.
pub struct PendingClose {
    pub id: TabId,
    pub name: String,
}

pub struct AppState {
    pub tabs: TabManager,
    pub input: TextArea<'static>,
    pub completion: CompletionEngine,
    pub highlighter: Highlighter,
    pub scroll: ScrollState,
    pub layout: AppLayout,
    pub dispatcher: Arc<DispatchClient>,
    pub pending_close: Option<PendingClose>,
    pub last_response: Option<String>,
    pub last_error: Option<String>,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let dispatcher = Arc::new(DispatchClient::new(DispatchConfig {
            endpoint: config.endpoint.clone(),
            timeout: config.timeout(),
        }));

        let mut state = Self {
            tabs: TabManager::new(),
            input: TextArea::default(),
            completion: CompletionEngine::new(LUAU_SUGGESTIONS),
            highlighter: Highlighter::new(Grammar::luau()),
            scroll: ScrollState::default(),
            layout: AppLayout::default(),
            dispatcher,
            pending_close: None,
            last_response: None,
            last_error: None,
            notice: None,
            should_quit: false,
        };
        state.sync_input_from_active();
        state
    }

    pub fn input_text(&self) -> String {
        self.input.lines().join("\n")
    }

    /// Byte offset of the caret within the joined buffer text.
    pub fn caret_offset(&self) -> usize {
        let (row, col) = self.input.cursor();
        let lines = self.input.lines();
        let mut offset = 0;
        for line in lines.iter().take(row) {
            offset += line.len() + 1;
        }
        if let Some(line) = lines.get(row) {
            offset += line
                .chars()
                .take(col)
                .map(|ch| ch.len_utf8())
                .sum::<usize>();
        }
        offset
    }

    fn move_caret_to_offset(&mut self, text: &str, offset: usize) {
        let before = &text[..offset.min(text.len())];
        let row = before.matches('\n').count();
        let col = before.rsplit('\n').next().unwrap_or("").chars().count();
        self.input
            .move_cursor(CursorMove::Jump(row as u16, col as u16));
    }

    /// Rebuild the textarea from the active tab. Any visible suggestion
    /// overlay belongs to the previous tab and is dropped.
    pub fn sync_input_from_active(&mut self) {
        let content = self.tabs.active().content.clone();
        let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let mut input = TextArea::new(lines);
        input.move_cursor(CursorMove::Jump(0, 0));
        self.input = input;
        self.completion.cancel();
        self.scroll = ScrollState::default();
    }

    /// Push the textarea content into the active tab, marking it unsaved.
    pub fn commit_input(&mut self) {
        let id = self.tabs.active_id();
        self.tabs.update_content(id, self.input_text());
    }

    pub fn refresh_completion(&mut self) {
        let text = self.input_text();
        let caret = self.caret_offset();
        self.completion.refresh(&text, caret, &CellMetrics);
    }

    pub fn apply_acceptance(&mut self, acceptance: Acceptance) {
        let lines: Vec<String> = acceptance.new_text.split('\n').map(str::to_string).collect();
        self.input = TextArea::new(lines);
        self.move_caret_to_offset(&acceptance.new_text, acceptance.new_caret);
        self.commit_input();
    }

    pub fn new_tab(&mut self) {
        self.commit_input();
        self.tabs.create();
        self.sync_input_from_active();
    }

    pub fn open_tab(&mut self, name: &str, content: String) {
        self.commit_input();
        self.tabs.open(name, content);
        self.sync_input_from_active();
    }

    pub fn select_tab(&mut self, id: TabId) {
        if id == self.tabs.active_id() {
            return;
        }
        self.commit_input();
        self.tabs.set_active(id);
        self.sync_input_from_active();
    }

    pub fn next_tab(&mut self) {
        self.step_tab(1);
    }

    pub fn prev_tab(&mut self) {
        self.step_tab(-1);
    }

    fn step_tab(&mut self, step: isize) {
        let tabs = self.tabs.tabs();
        if tabs.len() < 2 {
            return;
        }
        let active = self.tabs.active_id();
        let index = tabs.iter().position(|tab| tab.id == active).unwrap_or(0);
        let len = tabs.len() as isize;
        let next = (index as isize + step).rem_euclid(len) as usize;
        let id = tabs[next].id;
        self.select_tab(id);
    }

    /// Close the active tab, or park a confirmation request when it has
    /// unsaved changes.
    pub fn request_close_active(&mut self) {
        self.commit_input();
        let id = self.tabs.active_id();
        match self.tabs.close(id) {
            CloseOutcome::ConfirmClose { id, name } => {
                self.pending_close = Some(PendingClose { id, name });
            }
            CloseOutcome::Closed | CloseOutcome::Reset => self.sync_input_from_active(),
        }
    }

    pub fn resolve_close(&mut self, confirmed: bool) {
        let Some(pending) = self.pending_close.take() else {
            return;
        };
        if confirmed {
            self.tabs.close_confirmed(pending.id);
            self.sync_input_from_active();
        }
    }

    pub fn save_active(&mut self) {
        self.commit_input();
        let dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
        let id = self.tabs.active_id();
        match files::save_script(self.tabs.active(), &dir) {
            Ok(path) => {
                self.tabs.mark_saved(id);
                self.notice = Some(format!("Saved {}", path.display()));
            }
            Err(err) => self.notice = Some(format!("{err:#}")),
        }
    }

    pub fn copy_active(&mut self) {
        self.commit_input();
        let content = self.tabs.active().content.clone();
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(content)) {
            Ok(()) => self.notice = Some("Copied to clipboard".to_string()),
            Err(err) => self.notice = Some(format!("Failed to copy to clipboard: {err}")),
        }
    }

    pub fn start_execute(&mut self, tx: &mpsc::UnboundedSender<AppEvent>) {
        // The execute control is disabled while a run is in flight.
        if self.dispatcher.is_executing() {
            return;
        }
        self.commit_input();
        self.begin_dispatch();
        let client = Arc::clone(&self.dispatcher);
        let script = self.tabs.active().content.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = client.execute(&script).await;
            let _ = tx.send(AppEvent::DispatchFinished {
                action: DispatchAction::Execute,
                outcome,
            });
        });
    }

    pub fn start_inject(&mut self, tx: &mpsc::UnboundedSender<AppEvent>) {
        if self.dispatcher.is_injecting() {
            return;
        }
        self.begin_dispatch();
        let client = Arc::clone(&self.dispatcher);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = client.inject().await;
            let _ = tx.send(AppEvent::DispatchFinished {
                action: DispatchAction::Inject,
                outcome,
            });
        });
    }

    fn begin_dispatch(&mut self) {
        self.last_response = None;
        self.last_error = None;
        self.notice = None;
    }

    pub fn finish_dispatch(&mut self, action: DispatchAction, outcome: DispatchResult<String>) {
        match outcome {
            Ok(body) => {
                let body = if body.is_empty() {
                    "(empty response)".to_string()
                } else {
                    body
                };
                self.last_response = Some(format!("{}: {}", action.label(), body));
            }
            Err(err) => self.last_error = Some(err.user_message(action)),
        }
    }

    pub fn has_panel(&self) -> bool {
        self.last_response.is_some() || self.last_error.is_some() || self.notice.is_some()
    }

    /// Keep the caret row inside the viewport. Called once per frame before
    /// drawing; the gutter reads the same offset, so it follows the editor.
    pub fn update_scroll(&mut self) {
        let (row, _) = self.input.cursor();
        self.scroll
            .update_content_height(self.input.lines().len());
        self.scroll
            .update_viewport_height(self.layout.text.height as usize);
        self.scroll.ensure_visible(row);
    }

    /// Display width of the line prefix before the caret, for cursor drawing.
    pub fn cursor_display_col(&self) -> usize {
        let (row, col) = self.input.cursor();
        self.input
            .lines()
            .get(row)
            .map(|line| {
                let prefix: String = line.chars().take(col).collect();
                prefix.width()
            })
            .unwrap_or(0)
    }

    /// A caret-moving click: reposition the cursor and drop any visible
    /// suggestion overlay so it cannot go stale.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        self.completion.cancel();

        let tab_bar = self.layout.tab_bar;
        if row == tab_bar.y && column >= tab_bar.x {
            if let Some(id) = super::components::hit_test(&self.tabs, tab_bar.x, column) {
                self.select_tab(id);
            }
            return;
        }

        let text = self.layout.text;
        if column < text.x
            || column >= text.x + text.width
            || row < text.y
            || row >= text.y + text.height
        {
            return;
        }
        let target_row = self.scroll.offset + (row - text.y) as usize;
        let target_col = (column - text.x) as usize;
        self.input.move_cursor(CursorMove::Jump(
            target_row.min(u16::MAX as usize) as u16,
            target_col.min(u16::MAX as usize) as u16,
        ));
    }
}
