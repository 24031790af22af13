use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::HashSet;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Keywords Luau layers on top of the base Lua grammar. `task` covers the
/// scheduling namespace (`task.wait`, `task.spawn`, `task.delay`).
const LUAU_EXTRA_KEYWORDS: &[&str] = &["continue", "export", "type", "typeof", "task"];

const LUAU_KEYWORD_COLOR: Color = Color::Rgb(180, 142, 173);

/// Immutable grammar configuration: base syntax definitions, theme, and the
/// Luau keyword overlay. Built once at startup and only read afterwards; the
/// base grammar is never patched in place.
pub struct Grammar {
    syntax_set: SyntaxSet,
    theme: Theme,
    extra_keywords: HashSet<&'static str>,
}

impl Grammar {
    pub fn luau() -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        let theme = theme_set.themes["base16-ocean.dark"].clone();
        Self {
            syntax_set,
            theme,
            extra_keywords: LUAU_EXTRA_KEYWORDS.iter().copied().collect(),
        }
    }
}

/// Renders buffer content to styled lines. Stateless per call: the same
/// content always produces the same lines.
pub struct Highlighter {
    grammar: Grammar,
}

impl Highlighter {
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    pub fn highlight_lines(&self, content: &str) -> Vec<Line<'static>> {
        let grammar = &self.grammar;
        let syntax = grammar
            .syntax_set
            .find_syntax_by_token("lua")
            .unwrap_or_else(|| grammar.syntax_set.find_syntax_plain_text());
        let mut highlighter = HighlightLines::new(syntax, &grammar.theme);

        let mut lines = Vec::new();
        for line in LinesWithEndings::from(content) {
            let ranges = highlighter
                .highlight_line(line, &grammar.syntax_set)
                .unwrap_or_default();

            let mut spans = Vec::new();
            for (style, text) in ranges {
                let text = text.trim_end_matches('\n');
                if text.is_empty() {
                    continue;
                }
                let style = if grammar.extra_keywords.contains(text.trim()) {
                    Style::default()
                        .fg(LUAU_KEYWORD_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Rgb(
                        style.foreground.r,
                        style.foreground.g,
                        style.foreground.b,
                    ))
                };
                spans.push(Span::styled(text.to_string(), style));
            }
            lines.push(Line::from(spans));
        }

        // The editor shows a line after a trailing newline; mirror that here
        // so the rendered line count matches Tab::line_count.
        if content.is_empty() || content.ends_with('\n') {
            lines.push(Line::from(""));
        }
        lines
    }
}
