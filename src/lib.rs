//! # Introduction
//!
//! c2js translates a small subset of C into JavaScript. The output is meant
//! to be shown next to the source and run in a sandboxed host that supplies
//! `console.log`; the crate itself never executes JavaScript.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → Code generator → JavaScript
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds an AST with a recursive
//!    descent parser; binary operators use precedence climbing.
//! 2. [`codegen`]: walks the AST and emits JavaScript, one statement per line.
//! 3. [`compile()`]: runs both stages; errors from any stage come back as a
//!    [`CompileError`].
//! 4. [`ui`]: ratatui-based viewer showing source and output side by side;
//!    not part of the stable library API.
//!
//! ## Supported C subset
//!
//! `int` functions and variables, `if/else`, `while`, `for`, `return`,
//! blocks, calls, assignment as an expression, and the binary operators
//! `|| && == != < > <= >= + - * / %`. Calls to `printf` become `console.log`
//! with the arguments passed through untouched. Preprocessor lines and
//! comments are skipped.
//!
//! ```
//! let js = c2js::compile("int main() { return 1 + 2 + 3; }").unwrap();
//! assert_eq!(js, "function main() {\n    return (1 + (2 + 3));\n}\nmain();");
//! ```

pub mod codegen;
pub mod compile;
pub mod error;
pub mod parser;
pub mod ui;

pub use compile::{check, compile};
pub use error::CompileError;
