//! Statement parsing implementation
//!
//! This module handles parsing of all statement forms:
//!
//! - Variable declarations: `int x = 42;`
//! - Control flow: `if`/`else`, `while`, `for`
//! - `return expr;`
//! - Compound statements: `{ ... }`
//! - Expression statements: function calls, assignments
//!
//! # Grammar
//!
//! ```text
//! statement ::= block | var_decl | return_stmt | if_stmt
//!             | while_stmt | for_stmt | expr_stmt
//! block     ::= '{' statement* '}'
//! var_decl  ::= 'int' IDENT '=' expr ';'
//! if_stmt   ::= 'if' '(' expr ')' statement ('else' statement)?
//! while_stmt::= 'while' '(' expr ')' statement
//! for_stmt  ::= 'for' '(' (';' | var_decl | expr_stmt) expr ';' expr ')' statement
//! ```
//!
//! Control-flow bodies are a single statement; several statements need an
//! explicit block.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse block statements (inside braces, excluding the braces themselves)
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_kind() {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::Int => self.parse_variable_declaration(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::If => self.parse_if_statement(),
            TokenKind::While => self.parse_while_statement(),
            TokenKind::For => self.parse_for_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::LBrace)?;
        let statements = self.parse_block_statements()?;
        self.expect(&TokenKind::RBrace)?;
        Ok(Stmt::block(statements))
    }

    /// Parse variable declaration: int name = init;
    fn parse_variable_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Int)?;
        let name = self.expect_identifier()?;
        self.expect(&TokenKind::Assign)?;
        let init = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::var_decl(name, init))
    }

    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::expr(expr))
    }

    /// Parse return statement; the value is mandatory
    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::Return)?;
        let expr = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;

        Ok(Stmt::ret(expr))
    }

    /// Parse if statement. A trailing `else` binds to the nearest `if`.
    fn parse_if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::If)?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;

        let then_branch = self.parse_statement()?;

        let else_branch = if self.match_token(&TokenKind::Else) {
            Some(self.parse_statement()?)
        } else {
            None
        };

        Ok(Stmt::if_else(condition, then_branch, else_branch))
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::While)?;
        self.expect(&TokenKind::LParen)?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;

        let body = self.parse_statement()?;

        Ok(Stmt::while_loop(condition, body))
    }

    /// Parse for statement. The init clause is optional; the condition and
    /// update clauses are not.
    fn parse_for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(&TokenKind::For)?;
        self.expect(&TokenKind::LParen)?;

        // Both init forms consume their own semicolon
        let init = if self.match_token(&TokenKind::Semicolon) {
            None
        } else if self.check(&TokenKind::Int) {
            Some(self.parse_variable_declaration()?)
        } else {
            Some(self.parse_expression_statement()?)
        };

        let condition = self.parse_expression()?;
        self.expect(&TokenKind::Semicolon)?;

        let update = self.parse_expression()?;
        self.expect(&TokenKind::RParen)?;

        let body = self.parse_statement()?;

        Ok(Stmt::for_loop(init, condition, update, body))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::{parse, ParseError};

    /// Parse `source` as the body of `main` and return its statements.
    fn parse_body(source: &str) -> Result<Vec<Stmt>, ParseError> {
        let wrapped = format!("int main() {{ {} }}", source);
        let program = parse(tokenize(&wrapped).unwrap())?;
        match program.body.into_iter().next() {
            Some(Stmt::Function { body, .. }) => Ok(body),
            other => panic!("Expected main function, got {:?}", other),
        }
    }

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn test_variable_declaration() {
        let body = parse_body("int x = 5;").unwrap();
        assert_eq!(body, vec![Stmt::var_decl("x", Expr::literal(5))]);
    }

    #[test]
    fn test_declaration_requires_initializer() {
        let err = parse_body("int x;").unwrap_err();
        assert_eq!(err.to_string(), "Expected ASSIGN but got SEMICOLON at line 1");
    }

    #[test]
    fn test_if_else_single_statements() {
        let body = parse_body("if (x) return 1; else return 2;").unwrap();
        assert_eq!(
            body,
            vec![Stmt::if_else(
                x(),
                Stmt::ret(Expr::literal(1)),
                Some(Stmt::ret(Expr::literal(2))),
            )]
        );
    }

    #[test]
    fn test_if_branch_is_one_statement() {
        // Only the first statement belongs to the branch
        let body = parse_body("if (x) x = 1; x = 2;").unwrap();
        assert_eq!(body.len(), 2);
        assert!(matches!(&body[1], Stmt::ExprStmt(Expr::Assign { .. })));
    }

    #[test]
    fn test_dangling_else_binds_inner() {
        let body = parse_body("if (x) if (x) return 1; else return 2;").unwrap();
        match &body[0] {
            Stmt::If {
                then_branch,
                else_branch: None,
                ..
            } => assert!(matches!(
                then_branch.as_ref(),
                Stmt::If {
                    else_branch: Some(_),
                    ..
                }
            )),
            other => panic!("Unexpected {:?}", other),
        }
    }

    #[test]
    fn test_while_with_block() {
        let body = parse_body("while (x < 10) { x = x + 1; }").unwrap();
        assert_eq!(
            body,
            vec![Stmt::while_loop(
                Expr::binary(BinaryOp::Lt, x(), Expr::literal(10)),
                Stmt::block(vec![Stmt::expr(Expr::assign(
                    "x",
                    Expr::binary(BinaryOp::Add, x(), Expr::literal(1)),
                ))]),
            )]
        );
    }

    #[test]
    fn test_for_init_forms() {
        let body = parse_body(
            "for (int i = 0; i < 3; i = i + 1) x = i;
             for (x = 0; x < 3; x = x + 1) {}
             for (; x; x = 0) {}",
        )
        .unwrap();

        let inits: Vec<_> = body
            .iter()
            .map(|stmt| match stmt {
                Stmt::For { init, .. } => init.as_deref().map(Stmt::kind_name),
                other => panic!("Expected for, got {:?}", other),
            })
            .collect();
        assert_eq!(inits, [Some("VarDecl"), Some("ExprStmt"), None]);
    }

    #[test]
    fn test_for_requires_condition_and_update() {
        let err = parse_body("for (;;) {}").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected token in primary: SEMICOLON");
    }

    #[test]
    fn test_nested_blocks() {
        let body = parse_body("{ { } x; }").unwrap();
        assert_eq!(
            body,
            vec![Stmt::block(vec![Stmt::block(vec![]), Stmt::expr(x())])]
        );
    }

    #[test]
    fn test_return_requires_value() {
        let err = parse_body("return;").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected token in primary: SEMICOLON");
    }
}
