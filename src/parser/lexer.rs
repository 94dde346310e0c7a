//! Lexer (tokenizer) for the C subset
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! `#include` and other preprocessor directives are silently skipped rather than
//! parsed, matching the translator's no-preprocessor policy.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Reserved words and the token kinds they lex to.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.insert("int", TokenKind::Int);
    map.insert("return", TokenKind::Return);
    map.insert("if", TokenKind::If);
    map.insert("else", TokenKind::Else);
    map.insert("while", TokenKind::While);
    map.insert("for", TokenKind::For);
    map
});

/// All token kinds produced by the lexer.
///
/// Literal-carrying kinds hold their payload inline; every other kind is a
/// bare discriminant. [`TokenKind::name`] gives the diagnostic spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // Literals
    Number(i64),
    Str(String),

    // Identifiers
    Ident(String),

    // Keywords
    Int,
    Return,
    If,
    Else,
    While,
    For,

    // Two-character operators
    EqEq,   // ==
    NotEq,  // !=
    Le,     // <=
    Ge,     // >=
    AndAnd, // &&
    OrOr,   // ||

    // Single-character operators
    Plus,    // +
    Minus,   // -
    Star,    // *
    Slash,   // /
    Percent, // %
    Assign,  // =
    Lt,      // <
    Gt,      // >

    // Punctuation
    Semicolon, // ;
    Comma,     // ,
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // End of file
    Eof,
}

impl TokenKind {
    /// The kind's name as it appears in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUMBER",
            TokenKind::Str(_) => "STRING",
            TokenKind::Ident(_) => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Le => "<=",
            TokenKind::Ge => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERC",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "NUMBER({})", n),
            TokenKind::Str(s) => write!(f, "STRING(\"{}\")", s),
            TokenKind::Ident(s) => write!(f, "IDENT({})", s),
            other => f.write_str(other.name()),
        }
    }
}

/// A classified lexical unit and the 1-based line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Self { kind, line }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}  {}", self.line, self.kind)
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Unknown char: {ch} at line {line}")]
    UnknownChar { ch: char, line: usize },
    #[error("Unterminated string literal at line {line}")]
    UnterminatedString { line: usize },
    #[error("Unterminated block comment at line {line}")]
    UnterminatedComment { line: usize },
    #[error("Invalid integer literal: {text} at line {line}")]
    InvalidNumber { text: String, line: usize },
}

impl LexError {
    /// Line the offending input starts on.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnknownChar { line, .. }
            | LexError::UnterminatedString { line }
            | LexError::UnterminatedComment { line }
            | LexError::InvalidNumber { line, .. } => *line,
        }
    }
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lexer for C-subset source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments()?;

            if self.is_at_end() {
                tokens.push(Token::new(TokenKind::Eof, self.line));
                break;
            }

            if self.peek() == Some('#') {
                self.skip_preprocessor_directive();
                continue;
            }

            tokens.push(self.next_token()?);
        }

        log::trace!("lexed {} tokens over {} lines", tokens.len(), self.line);
        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return Ok(Token::new(TokenKind::Eof, line)),
        };

        let kind = match ch {
            '"' => return self.string_literal(),
            '0'..='9' => return self.number_literal(ch),
            'a'..='z' | 'A'..='Z' | '_' => return Ok(self.identifier_or_keyword(ch)),

            '=' => self.pair('=', TokenKind::EqEq, TokenKind::Assign),
            '<' => self.pair('=', TokenKind::Le, TokenKind::Lt),
            '>' => self.pair('=', TokenKind::Ge, TokenKind::Gt),
            '!' if self.peek() == Some('=') => {
                self.advance();
                TokenKind::NotEq
            }
            '&' if self.peek() == Some('&') => {
                self.advance();
                TokenKind::AndAnd
            }
            '|' if self.peek() == Some('|') => {
                self.advance();
                TokenKind::OrOr
            }

            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,

            _ => return Err(LexError::UnknownChar { ch, line }),
        };

        Ok(Token::new(kind, line))
    }

    /// Consume `second` if it follows, choosing between the two-character and
    /// one-character kinds.
    fn pair(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    /// Parse string literal. The text between the quotes is kept verbatim;
    /// backslashes are not interpreted.
    fn string_literal(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                return Ok(Token::new(TokenKind::Str(string), line));
            }
            string.push(ch);
        }

        Err(LexError::UnterminatedString { line })
    }

    /// Parse numeric literal (decimal integers only)
    fn number_literal(&mut self, first_digit: char) -> Result<Token, LexError> {
        let line = self.line;
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let value = num_str
            .parse::<i64>()
            .map_err(|_| LexError::InvalidNumber { text: num_str, line })?;

        Ok(Token::new(TokenKind::Number(value), line))
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char) -> Token {
        let line = self.line;
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = KEYWORDS
            .get(ident.as_str())
            .cloned()
            .unwrap_or(TokenKind::Ident(ident));

        Token::new(kind, line)
    }

    /// Skip whitespace and comments
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            match self.peek() {
                Some(ch) if ch.is_whitespace() => {
                    self.advance();
                }
                Some('/') => match self.peek_ahead(1) {
                    Some('/') => self.skip_line_comment(),
                    Some('*') => self.skip_block_comment()?,
                    _ => break,
                },
                _ => break,
            }
        }
        Ok(())
    }

    /// Skip single-line comment (// ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Skip multi-line comment (/* ... */)
    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let start_line = self.line;
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(LexError::UnterminatedComment { line: start_line })
    }

    /// Skip preprocessor directive (#include, #define, ...) up to and
    /// including the end of its line
    fn skip_preprocessor_directive(&mut self) {
        self.skip_line_comment();
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character, counting lines
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}
