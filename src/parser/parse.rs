//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, top-level items and functions
//! - `statements`: Parsing statements (if, while, for, etc.)
//! - `expressions`: Parsing expressions with precedence climbing
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state. The only state is a cursor
//! into the token vector; it never moves backwards.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Expected {expected} but got {found} at line {line}")]
    Expected {
        expected: &'static str,
        found: &'static str,
        line: usize,
    },
    /// The message carries no line; `line` is kept for highlighting only.
    #[error("Unexpected token in primary: {found}")]
    UnexpectedPrimary { found: &'static str, line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Expected { line, .. } | ParseError::UnexpectedPrimary { line, .. } => *line,
        }
    }
}

/// Parse a token stream into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Recursive descent parser for the C subset
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Create a parser over `tokens`. A trailing EOF is supplied when the
    /// stream lacks one, so lookahead never runs off the end.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(Token { kind: TokenKind::Eof, .. })) {
            let line = tokens.last().map_or(1, |token| token.line);
            tokens.push(Token::new(TokenKind::Eof, line));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program (top-level items)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();

        while !self.is_at_end() {
            // `int` at the top level always opens a function definition;
            // anything else is an ordinary statement
            let item = if self.check(&TokenKind::Int) {
                self.parse_function_definition()?
            } else {
                self.parse_statement()?
            };
            body.push(item);
        }

        log::debug!("parsed {} top-level items", body.len());
        Ok(Program::new(body))
    }

    /// Parse function definition: int name(params) { body }
    fn parse_function_definition(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Int)?;
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::LParen)?;

        let params = self.parse_parameter_list()?;

        self.expect(&TokenKind::RParen)?;
        self.expect(&TokenKind::LBrace)?;
        let body = self.parse_block_statements()?;
        self.expect(&TokenKind::RBrace)?;

        log::trace!("function {}({})", name, params.join(", "));
        Ok(Stmt::function(name, params, body))
    }

    /// Parse parameter list: name, name, ... where each name may be preceded
    /// by `int`
    fn parse_parameter_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut params = Vec::new();

        if self.check(&TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            self.match_token(&TokenKind::Int);
            params.push(self.expect_identifier()?);

            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Compare by kind only; payloads of literal kinds are ignored.
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.peek_kind()) == std::mem::discriminant(kind)
    }

    /// Consume the next token, which must be of `kind`.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        let token = self.advance();
        if std::mem::discriminant(&token.kind) == std::mem::discriminant(kind) {
            Ok(token)
        } else {
            Err(ParseError::Expected {
                expected: kind.name(),
                found: token.kind.name(),
                line: token.line,
            })
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Ident(name) => Ok(name),
            other => Err(ParseError::Expected {
                expected: "IDENT",
                found: other.name(),
                line: token.line,
            }),
        }
    }

    /// Consume and return the current token. EOF is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> &Token {
        // `new` guarantees a trailing EOF and the cursor never passes it
        &self.tokens[self.position]
    }

    pub(crate) fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }
}
