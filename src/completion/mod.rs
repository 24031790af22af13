mod anchor;
mod catalog;
mod engine;
mod word;

pub use anchor::{caret_line_col, locate, Anchor, AnchorLayout, CellMetrics, TextMetrics};
pub use catalog::{Suggestion, SuggestionKind, LUAU_SUGGESTIONS};
pub use engine::{Acceptance, CompletionEngine, CompletionSession, MAX_CANDIDATES};
pub use word::{current_word_at, word_span_at};
