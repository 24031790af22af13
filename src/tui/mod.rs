mod app;
pub mod components;
mod event_loop;
mod input_handlers;
mod layout;
mod scroll_state;
mod terminal;
mod ui;

pub use app::{AppEvent, AppState};
pub use layout::{AppLayout, GUTTER_WIDTH};
pub use scroll_state::ScrollState;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::console::console;
use crate::files;

use event_loop::run_event_loop;
use terminal::{init_terminal, restore_terminal};

pub async fn run(config: AppConfig, paths: Vec<PathBuf>) -> Result<()> {
    let mut app = AppState::new(&config);

    for path in &paths {
        match files::read_script(path) {
            Ok((name, content)) => {
                app.tabs.open(&name, content);
            }
            Err(err) => console().error(&format!("{err:#}")),
        }
    }
    app.sync_input_from_active();

    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app).await;
    restore_terminal(terminal)?;
    result
}
