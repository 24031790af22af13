use super::word::clamp_to_char_boundary;
use unicode_width::UnicodeWidthStr;

/// Placement of the suggestion overlay, in the metrics provider's units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub top: usize,
    pub left: usize,
}

/// Width of a rendered string in the editor's font. Implementations may
/// measure off-screen, consult a font table, or count terminal cells.
pub trait TextMetrics {
    fn measure(&self, text: &str) -> usize;
}

/// Terminal metrics: rendered width is the display-column count.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl TextMetrics for CellMetrics {
    fn measure(&self, text: &str) -> usize {
        text.width()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AnchorLayout {
    pub line_height: usize,
    pub pad_x: usize,
    pub pad_y: usize,
}

impl Default for AnchorLayout {
    /// Terminal rendering: one cell per line, no padding.
    fn default() -> Self {
        Self {
            line_height: 1,
            pad_x: 0,
            pad_y: 0,
        }
    }
}

/// Zero-based line and column of the caret. The column counts characters in
/// the line segment before the caret.
pub fn caret_line_col(text: &str, caret: usize) -> (usize, usize) {
    let caret = clamp_to_char_boundary(text, caret);
    let before = &text[..caret];
    let line = before.matches('\n').count();
    let column = before.rsplit('\n').next().unwrap_or("").chars().count();
    (line, column)
}

/// Anchor for the overlay: one line below the caret's line, horizontally at
/// the measured width of the current line up to the caret. Recomputed on
/// every change; caret and content both move per keystroke, so nothing is
/// cached.
pub fn locate(text: &str, caret: usize, layout: AnchorLayout, metrics: &dyn TextMetrics) -> Anchor {
    let caret = clamp_to_char_boundary(text, caret);
    let before = &text[..caret];
    let line = before.matches('\n').count();
    let prefix = before.rsplit('\n').next().unwrap_or("");
    Anchor {
        top: (line + 1) * layout.line_height + layout.pad_y,
        left: metrics.measure(prefix) + layout.pad_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance font: every character is 7 units wide.
    struct FixedFont;

    impl TextMetrics for FixedFont {
        fn measure(&self, text: &str) -> usize {
            text.chars().count() * 7
        }
    }

    #[test]
    fn line_col_from_caret_offset() {
        assert_eq!(caret_line_col("abc", 0), (0, 0));
        assert_eq!(caret_line_col("abc", 2), (0, 2));
        assert_eq!(caret_line_col("ab\ncd\nef", 6), (2, 0));
        assert_eq!(caret_line_col("ab\ncd\nef", 8), (2, 2));
    }

    #[test]
    fn anchor_lands_below_and_after_the_caret() {
        let layout = AnchorLayout {
            line_height: 24,
            pad_x: 8,
            pad_y: 8,
        };
        let anchor = locate("local x\nprint(x)", 13, layout, &FixedFont);
        // Line 1, five characters before the caret on that line.
        assert_eq!(anchor.top, 2 * 24 + 8);
        assert_eq!(anchor.left, 5 * 7 + 8);
    }

    #[test]
    fn cell_metrics_counts_display_columns() {
        let anchor = locate("print", 5, AnchorLayout::default(), &CellMetrics);
        assert_eq!(anchor, Anchor { top: 1, left: 5 });
    }

    #[test]
    fn wide_characters_widen_the_anchor() {
        // CJK characters occupy two terminal cells each.
        let text = "你好";
        let anchor = locate(text, text.len(), AnchorLayout::default(), &CellMetrics);
        assert_eq!(anchor.left, 4);
    }
}
