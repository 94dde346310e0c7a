//! JavaScript output pane rendering
//!
//! Shows the emitted JavaScript, or the compile diagnostic when the source
//! did not translate.

use super::utils::{border_style, clamp_scroll, highlight_code, Syntax};
use crate::error::CompileError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &Result<String, CompileError>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" JavaScript ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let js = match output {
        Ok(js) => js,
        Err(err) => {
            let title = format!("Compilation error ({})", err.stage());
            let text = vec![
                Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    err.to_string(),
                    Style::default().fg(DEFAULT_THEME.fg),
                )),
            ];
            let paragraph = Paragraph::new(text)
                .block(block.padding(Padding::new(1, 0, 0, 0)))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
            return;
        }
    };

    if js.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let lines: Vec<&str> = js.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_items: Vec<ListItem> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(highlight_code(line, Syntax::JavaScript)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
