//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: C source with syntax highlighting and the error line marked
//! - [`output`]: emitted JavaScript, or the compile diagnostic
//! - [`status`]: status bar with keybindings and compile state
//! - `utils`: highlighting, border and scroll helpers shared by the panes
//!
//! Each pane module exports a `render_*` function taking the frame, its area,
//! the data to draw and a mutable scroll offset where the pane scrolls.

mod utils;

pub mod output;
pub mod source;
pub mod status;

pub use output::render_output_pane;
pub use source::{center_on_line, render_source_pane};
pub use status::render_status_bar;
