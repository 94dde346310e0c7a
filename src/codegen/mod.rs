//! JavaScript code generation
//!
//! Walks a [`Program`] and emits one JavaScript statement per line:
//!
//! - [`Emitter`] owns the output buffer and the current indentation depth
//! - `statements`: statement emission, including block layout
//! - `expressions`: expression rendering; expressions never span lines
//!
//! Blocks are written exactly where the source had them. A control-flow
//! body that was a single statement is emitted on its own indented line
//! without braces.
//!
//! After the top-level items, a call to `main()` is appended when the program
//! defines a top-level `main` function.

mod expressions;
mod statements;

use crate::parser::ast::Program;

pub use expressions::quote_string;

/// Indentation unit for nested statements.
const INDENT: &str = "    ";

/// Code generation error type
///
/// Only raised for trees the parser cannot produce, such as a function
/// definition nested inside another statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    #[error("Unknown stmt type: {0}")]
    UnknownStmt(&'static str),
}

/// Generate JavaScript source for `program`.
pub fn generate(program: &Program) -> Result<String, CodegenError> {
    let mut emitter = Emitter::new();
    emitter.emit_program(program)?;
    Ok(emitter.finish())
}

/// Line-oriented output buffer
pub struct Emitter {
    lines: Vec<String>,
    depth: usize,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
        }
    }

    /// Emit every top-level item, then the entry-point call if there is one.
    pub fn emit_program(&mut self, program: &Program) -> Result<(), CodegenError> {
        for item in &program.body {
            self.emit_top_level(item)?;
        }

        if program.has_main() {
            self.line("main();");
        }

        log::debug!("emitted {} lines of JavaScript", self.lines.len());
        Ok(())
    }

    /// Consume the emitter, joining the lines with `\n` (no trailing newline).
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }

    /// Push one line at the current depth.
    pub(crate) fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        let mut line = String::with_capacity(INDENT.len() * self.depth + text.len());
        for _ in 0..self.depth {
            line.push_str(INDENT);
        }
        line.push_str(text);
        self.lines.push(line);
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
