//! Shared pane helpers: syntax highlighting, borders and scroll clamping

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Which keyword set to highlight with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    C,
    JavaScript,
}

impl Syntax {
    fn keyword_style(self, word: &str, is_function: bool) -> Style {
        let is_type = matches!((self, word), (Syntax::C, "int"));
        let is_keyword = match self {
            Syntax::C => matches!(word, "return" | "if" | "else" | "while" | "for"),
            Syntax::JavaScript => matches!(
                word,
                "function" | "let" | "return" | "if" | "else" | "while" | "for"
            ),
        };

        if is_type {
            Style::default().fg(DEFAULT_THEME.type_name)
        } else if is_keyword {
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD)
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            Style::default().fg(DEFAULT_THEME.number)
        } else if is_function {
            Style::default().fg(DEFAULT_THEME.function)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        }
    }
}

/// Simple per-line syntax highlighting. Block comments spanning lines are
/// not tracked; only `//` comments are recognised.
pub fn highlight_code<'a>(line: &'a str, syntax: Syntax) -> Line<'a> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;

    let flush_word = move |spans: &mut Vec<Span<'a>>, start: Option<usize>, end: usize, next: Option<char>| {
        if let Some(start) = start {
            let word = &line[start..end];
            let style = syntax.keyword_style(word, next == Some('('));
            spans.push(Span::styled(word, style));
        }
    };

    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_ascii_alphanumeric() || c == '_' {
            word_start.get_or_insert(i);
            continue;
        }

        flush_word(&mut spans, word_start.take(), i, Some(c));

        if c == '/' && chars.peek().map(|&(_, next)| next) == Some('/') {
            spans.push(Span::styled(
                &line[i..],
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if c == '"' {
            let mut end = line.len();
            let mut escaped = false;
            for (j, next) in chars.by_ref() {
                if next == '"' && !escaped {
                    end = j + 1;
                    break;
                }
                escaped = next == '\\' && !escaped;
            }
            spans.push(Span::styled(
                &line[i..end],
                Style::default().fg(DEFAULT_THEME.string),
            ));
            continue;
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
            '#' => Style::default().fg(DEFAULT_THEME.comment),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(&line[i..i + c.len_utf8()], style));
    }

    flush_word(&mut spans, word_start, line.len(), None);
    Line::from(spans)
}

/// Border style for a pane, depending on focus
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so a list of `total` rows fills `visible` rows where possible.
pub fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line<'_>) -> Vec<String> {
        line.spans.iter().map(|span| span.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_keeps_all_text() {
        let source = r#"int main() { printf("a \"b\" c"); return 10; } // done"#;
        let line = highlight_code(source, Syntax::C);
        assert_eq!(texts(&line).concat(), source);
    }

    #[test]
    fn test_highlight_splits_words_and_strings() {
        let line = highlight_code(r#"let x = "hi";"#, Syntax::JavaScript);
        assert_eq!(texts(&line), ["let", " ", "x", " ", "=", " ", "\"hi\"", ";"]);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));
    }

    #[test]
    fn test_highlight_unterminated_string() {
        let line = highlight_code("x = \"abc", Syntax::C);
        assert_eq!(texts(&line).last().map(String::as_str), Some("\"abc"));
    }

    #[test]
    fn test_clamp_scroll() {
        let mut offset = 50;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        clamp_scroll(&mut offset, 5, 10);
        assert_eq!(offset, 0);
    }
}
