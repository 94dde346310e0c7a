//! C-subset front end
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parser state, helpers and the top-level entry point
//! - `statements` / `expressions`: the grammar productions, as `impl Parser` blocks
//! - [`ast`]: AST node definitions and their constructors
//!
//! # Supported C Subset
//!
//! - Types: `int` only, and only as a declaration marker
//! - Statements: `int x = e;`, `return e;`, `if`/`else`, `while`, `for`, blocks,
//!   expression statements
//! - Expressions: integer and string literals, variables, assignment, calls,
//!   binary operators `|| && == != < > <= >= + - * / %`
//! - Preprocessor lines are skipped, never expanded
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with precedence climbing for binary operators.
//! No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use lexer::{tokenize, LexError, Lexer, Token, TokenKind};
pub use parse::{parse, ParseError, Parser};
