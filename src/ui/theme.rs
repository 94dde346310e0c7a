//! Colour palette shared by the viewer panes

use ratatui::style::Color;

/// Named colours, looked up by role rather than by hue
pub struct Theme {
    pub fg: Color,
    /// Brackets and other structural punctuation
    pub primary: Color,
    /// Line numbers, comments, unfocused borders
    pub comment: Color,
    pub success: Color,
    /// Compile errors and the offending source line
    pub error: Color,
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    /// Status bar background
    pub current_line_bg: Color,
    /// Names directly followed by `(`
    pub function: Color,
    /// `int`
    pub type_name: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(203, 166, 247),
    string: Color::Rgb(166, 227, 161),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(49, 50, 68),
    function: Color::Rgb(137, 180, 250),
    type_name: Color::Rgb(148, 226, 213),
};
