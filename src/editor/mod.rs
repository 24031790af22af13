mod manager;
mod tab;

pub use manager::{CloseOutcome, TabManager, DEFAULT_TAB_NAME};
pub use tab::{Tab, TabId};
