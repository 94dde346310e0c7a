//! Error type covering the whole compile pipeline
//!
//! Each stage has its own error type ([`LexError`], [`ParseError`],
//! [`CodegenError`]); [`CompileError`] wraps whichever stage failed first.
//! The `Display` output is the stage's message unchanged, so hosts can show
//! it to users or scan it for `line N`.

use crate::codegen::CodegenError;
use crate::parser::{LexError, ParseError};

/// Any failure from [`compile`](crate::compile())
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

impl CompileError {
    /// Source line the error points at, for highlighting. Code generation
    /// errors have none.
    pub fn line(&self) -> Option<usize> {
        match self {
            CompileError::Lex(err) => Some(err.line()),
            CompileError::Parse(err) => Some(err.line()),
            CompileError::Codegen(_) => None,
        }
    }

    /// Short stage label, e.g. for a status bar.
    pub fn stage(&self) -> &'static str {
        match self {
            CompileError::Lex(_) => "lex",
            CompileError::Parse(_) => "parse",
            CompileError::Codegen(_) => "codegen",
        }
    }
}
