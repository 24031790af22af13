pub mod cli;
pub mod completion;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod editor;
pub mod files;
pub mod highlight;
pub mod tui;

pub use completion::{CompletionEngine, Suggestion, SuggestionKind, LUAU_SUGGESTIONS};
pub use config::AppConfig;
pub use console::{console, init_console, Console, VerbosityLevel};
pub use dispatch::{DispatchAction, DispatchClient, DispatchConfig, DispatchError};
pub use editor::{CloseOutcome, Tab, TabId, TabManager};
pub use highlight::{Grammar, Highlighter};
