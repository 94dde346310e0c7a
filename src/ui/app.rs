//! Main TUI application state and logic

use crate::compile::compile;
use crate::error::CompileError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use super::panes::{center_on_line, render_output_pane, render_source_pane, render_status_bar};

/// Rows moved by PageUp / PageDown
const PAGE_SIZE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
}

impl FocusedPane {
    /// Move focus to the other pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// File the source was read from, reread on reload
    pub path: PathBuf,

    /// The C source being translated
    pub source_code: String,

    /// Result of the last compile
    pub result: Result<String, CompileError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub output_scroll: usize,

    /// Height of the source pane at the last draw, used to center the error line
    pub source_height: usize,

    /// Set after a compile so the next draw scrolls to the error line
    pub pending_error_focus: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app and compile `source_code` immediately
    pub fn new(path: PathBuf, source_code: String) -> Self {
        let mut app = App {
            path,
            source_code,
            result: Ok(String::new()),
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            output_scroll: 0,
            source_height: 0,
            pending_error_focus: false,
            should_quit: false,
            status_message: String::new(),
        };
        app.recompile();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Line the current error points at, if any
    pub fn error_line(&self) -> Option<usize> {
        self.result.as_ref().err().and_then(CompileError::line)
    }

    /// Compile the current source and refresh the status line
    pub fn recompile(&mut self) {
        self.result = compile(&self.source_code);
        self.output_scroll = 0;
        self.status_message = match &self.result {
            Ok(js) => format!("{} lines of JavaScript", js.lines().count()),
            Err(err) => format!("{} error: {}", err.stage(), err),
        };
        self.pending_error_focus = self.error_line().is_some();
        log::debug!("recompiled {}: {}", self.path.display(), self.status_message);
    }

    /// Reread the source file and recompile. A read failure keeps the
    /// previous source and reports the failure in the status bar.
    pub fn reload(&mut self) {
        match fs::read_to_string(&self.path) {
            Ok(source) => {
                self.source_code = source;
                self.recompile();
            }
            Err(err) => {
                self.status_message = format!("Cannot reload {}: {}", self.path.display(), err);
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Two panes side by side, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        self.source_height = columns[0].height.saturating_sub(2) as usize;
        if self.pending_error_focus {
            if let Some(line) = self.error_line() {
                self.source_scroll = center_on_line(line, self.source_height);
            }
            self.pending_error_focus = false;
        }

        let title = self.path.display().to_string();
        let error_line = self.error_line();
        render_source_pane(
            frame,
            columns[0],
            &title,
            &self.source_code,
            error_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        render_output_pane(
            frame,
            columns[1],
            &self.result,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.result.is_ok(),
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reload();
            }
            // Panes clamp the offset on the next draw
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE_SIZE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE_SIZE);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app_for(source: &str) -> App {
        App::new(PathBuf::from("test.c"), source.to_string())
    }

    #[test]
    fn test_new_compiles_source() {
        let app = app_for("int main() { return 0; }");
        assert_eq!(
            app.result.as_deref(),
            Ok("function main() {\n    return 0;\n}\nmain();")
        );
        assert_eq!(app.status_message, "4 lines of JavaScript");
        assert_eq!(app.error_line(), None);
    }

    #[test]
    fn test_error_sets_line_and_focus() {
        let app = app_for("int main() {\n  return 0\n}");
        assert_eq!(app.error_line(), Some(3));
        assert!(app.pending_error_focus);
        assert_eq!(
            app.status_message,
            "parse error: Expected SEMICOLON but got RBRACE at line 3"
        );
    }

    #[test]
    fn test_tab_switches_focus_and_scroll_target() {
        let mut app = app_for("int main() { return 0; }");
        press(&mut app, KeyCode::Down);
        assert_eq!(app.source_scroll, 1);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Output);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.output_scroll, PAGE_SIZE);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.output_scroll, PAGE_SIZE - 1);
        assert_eq!(app.source_scroll, 1);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.output_scroll, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = app_for("");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_reload_missing_file_keeps_source() {
        let mut app = App::new(
            PathBuf::from("/nonexistent/c2js/reload.c"),
            "int main() { return 0; }".to_string(),
        );
        press(&mut app, KeyCode::Char('r'));
        assert!(app.status_message.starts_with("Cannot reload"));
        assert!(app.result.is_ok());
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let path = std::env::temp_dir().join(format!("c2js_reload_{}.c", std::process::id()));
        fs::write(&path, "int main() { return 0; }").unwrap();
        let mut app = App::new(path.clone(), String::new());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.source_code, "int main() { return 0; }");
        assert!(app.result.as_deref().unwrap().ends_with("main();"));

        fs::write(&path, "int main() { return $; }").unwrap();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.error_line(), Some(1));

        fs::remove_file(&path).unwrap();
    }
}
