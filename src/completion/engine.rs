use super::anchor::{locate, Anchor, AnchorLayout, TextMetrics};
use super::catalog::Suggestion;
use super::word::{current_word_at, word_span_at};

/// Candidate list cap. Filtering preserves catalog order and truncates here.
pub const MAX_CANDIDATES: usize = 10;

/// State of a visible suggestion overlay. Recomputed per keystroke, never
/// persisted.
#[derive(Debug, Clone)]
pub struct CompletionSession {
    pub query: String,
    pub candidates: Vec<&'static Suggestion>,
    pub selected: usize,
    pub anchor: Anchor,
}

/// Buffer edit produced by accepting a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acceptance {
    pub new_text: String,
    /// Caret position immediately after the inserted text.
    pub new_caret: usize,
}

/// Two-state machine: hidden, or visible with a candidate list and selection.
#[derive(Debug)]
pub struct CompletionEngine {
    catalog: &'static [Suggestion],
    layout: AnchorLayout,
    session: Option<CompletionSession>,
}

impl CompletionEngine {
    pub fn new(catalog: &'static [Suggestion]) -> Self {
        Self {
            catalog,
            layout: AnchorLayout::default(),
            session: None,
        }
    }

    pub fn with_layout(catalog: &'static [Suggestion], layout: AnchorLayout) -> Self {
        Self {
            catalog,
            layout,
            session: None,
        }
    }

    /// Recompute the session for the new text and caret. Hides when no word is
    /// being typed or nothing matches; otherwise shows the first (at most)
    /// ten catalog entries whose label starts with the word,
    /// case-insensitively, with the selection reset to the top.
    pub fn refresh(&mut self, text: &str, caret: usize, metrics: &dyn TextMetrics) {
        let word = current_word_at(text, caret);
        if word.is_empty() {
            self.session = None;
            return;
        }

        let query = word.to_lowercase();
        let candidates: Vec<&'static Suggestion> = self
            .catalog
            .iter()
            .filter(|suggestion| suggestion.label.to_lowercase().starts_with(&query))
            .take(MAX_CANDIDATES)
            .collect();

        if candidates.is_empty() {
            self.session = None;
            return;
        }

        self.session = Some(CompletionSession {
            query: word.to_string(),
            candidates,
            selected: 0,
            anchor: locate(text, caret, self.layout, metrics),
        });
    }

    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&CompletionSession> {
        self.session.as_ref()
    }

    /// Move the selection down one entry, stopping at the last.
    pub fn select_next(&mut self) {
        if let Some(session) = &mut self.session {
            if session.selected + 1 < session.candidates.len() {
                session.selected += 1;
            }
        }
    }

    /// Move the selection up one entry, stopping at the first.
    pub fn select_prev(&mut self) {
        if let Some(session) = &mut self.session {
            session.selected = session.selected.saturating_sub(1);
        }
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Accept the selected candidate: replace the typed word span with its
    /// insert text and hide. Returns the resulting buffer edit, or None when
    /// nothing is visible.
    pub fn accept(&mut self, text: &str, caret: usize) -> Option<Acceptance> {
        let session = self.session.take()?;
        let suggestion = session.candidates.get(session.selected)?;

        let (start, end) = word_span_at(text, caret);
        let mut new_text = String::with_capacity(
            text.len() - (end - start) + suggestion.insert_text.len(),
        );
        new_text.push_str(&text[..start]);
        new_text.push_str(suggestion.insert_text);
        new_text.push_str(&text[end..]);

        Some(Acceptance {
            new_text,
            new_caret: start + suggestion.insert_text.len(),
        })
    }
}
