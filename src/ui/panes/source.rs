//! Source code pane rendering with syntax highlighting
//!
//! This module renders the C source being translated.
//!
//! # Features
//!
//! - Syntax highlighting for the C subset's keywords, strings, numbers and comments
//! - Line numbering
//! - The line named by a compile error is drawn in the error colours, the way
//!   an editor marks the offending line
//! - Free scrolling with the offset clamped to the file length

use super::utils::{border_style, clamp_scroll, highlight_code, Syntax};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    source_code: &str,
    error_line: Option<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let line_num_str = format!("{:4} ", line_num);
            let mut content_line = highlight_code(line, Syntax::C);

            if error_line == Some(line_num) {
                // ERROR LINE: red background, white bold text
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content_line.spans {
                    span.style = error_style;
                }
                let mut spans = vec![Span::styled(
                    line_num_str,
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )];
                spans.extend(content_line.spans);
                Line::from(spans)
            } else {
                let mut spans = vec![Span::styled(
                    line_num_str,
                    Style::default().fg(DEFAULT_THEME.comment), // Line numbers
                )];
                spans.extend(content_line.spans);
                Line::from(spans)
            }
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Scroll offset that puts `line` (1-based) near the middle of a pane
/// `visible_height` rows tall.
pub fn center_on_line(line: usize, visible_height: usize) -> usize {
    line.saturating_sub(1).saturating_sub(visible_height / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_on_line() {
        assert_eq!(center_on_line(1, 20), 0);
        assert_eq!(center_on_line(30, 20), 19);
        assert_eq!(center_on_line(0, 20), 0);
    }
}
