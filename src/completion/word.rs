/// Identifier characters, including `.` so dotted access like `task.wait`
/// completes as one word.
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.'
}

pub(crate) fn clamp_to_char_boundary(text: &str, mut offset: usize) -> usize {
    offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Span of the word being typed: the maximal run of identifier characters
/// ending at the caret. Returns an empty span (`start == caret`) when the
/// character before the caret is not an identifier character.
///
/// The span deliberately stops at the caret rather than extending into text to
/// the right, so accepting a suggestion replaces only what was typed.
pub fn word_span_at(text: &str, caret: usize) -> (usize, usize) {
    let caret = clamp_to_char_boundary(text, caret);
    let bytes = text.as_bytes();
    let mut start = caret;
    while start > 0 && is_word_byte(bytes[start - 1]) {
        start -= 1;
    }
    (start, caret)
}

/// The word currently being completed at the caret.
pub fn current_word_at(text: &str, caret: usize) -> &str {
    let (start, end) = word_span_at(text, caret);
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_word_before_caret() {
        assert_eq!(current_word_at("task.wait(1)", 4), "task");
    }

    #[test]
    fn dotted_access_is_one_word() {
        assert_eq!(current_word_at("task.wait(1)", 9), "task.wait");
    }

    #[test]
    fn empty_at_start_of_text() {
        assert_eq!(current_word_at("task.wait(1)", 0), "");
    }

    #[test]
    fn empty_between_non_identifier_characters() {
        assert_eq!(current_word_at("print(1) + (2)", 9), "");
    }

    #[test]
    fn underscores_and_digits_are_word_characters() {
        assert_eq!(current_word_at("local my_var2 = 1", 13), "my_var2");
    }

    #[test]
    fn caret_past_end_is_clamped() {
        assert_eq!(current_word_at("print", 100), "print");
    }

    #[test]
    fn span_matches_word() {
        assert_eq!(word_span_at("task.wait(1)", 4), (0, 4));
        assert_eq!(word_span_at("x = foo", 7), (4, 7));
    }

    #[test]
    fn non_ascii_neighbours_do_not_extend_the_word() {
        let text = "héllo wörld";
        // Caret right after "o" in "wörld"; the multibyte "ö" splits the run.
        assert_eq!(current_word_at(text, text.len()), "rld");
    }
}
