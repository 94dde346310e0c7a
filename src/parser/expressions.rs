//! Expression parsing implementation
//!
//! Binary operators go through a single precedence-climbing loop driven by
//! [`BinaryOp::precedence`]; everything else is a primary expression.
//!
//! # Supported Expressions
//!
//! - Literals: integers, strings
//! - Variables
//! - Assignment `name = expr`, allowed anywhere an expression is
//! - Calls `name(arg, ...)`
//! - Parenthesized expressions
//! - Binary operators `|| && == != < > <= >= + - * / %`
//!
//! # Associativity
//!
//! The right operand of an operator is parsed with that operator's own
//! precedence as the minimum, and operators of equal precedence keep
//! binding into it. Chains therefore group to the right: `1 - 2 - 3`
//! parses as `1 - (2 - 3)`. The emitted JavaScript keeps this grouping.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

/// Threshold that admits every binary operator.
const LOWEST_PRECEDENCE: u8 = 1;

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary(LOWEST_PRECEDENCE)
    }

    /// Precedence climbing over binary operators
    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        while let Some(op) = BinaryOp::from_token(self.peek_kind()) {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.advance();

            let right = self.parse_binary(precedence)?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse primary (literals, variables, assignments, calls, parenthesized
    /// expressions)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance();

        match token.kind {
            TokenKind::Number(n) => Ok(Expr::literal(n)),
            TokenKind::Str(s) => Ok(Expr::string(s)),
            TokenKind::Ident(name) => {
                if self.match_token(&TokenKind::LParen) {
                    let args = self.parse_argument_list()?;
                    self.expect(&TokenKind::RParen)?;
                    Ok(Expr::call(name, args))
                } else if self.match_token(&TokenKind::Assign) {
                    let value = self.parse_expression()?;
                    Ok(Expr::assign(name, value))
                } else {
                    Ok(Expr::variable(name))
                }
            }
            TokenKind::LParen => {
                let expr = self.parse_expression()?;
                self.expect(&TokenKind::RParen)?;
                Ok(expr)
            }
            other => Err(ParseError::UnexpectedPrimary {
                found: other.name(),
                line: token.line,
            }),
        }
    }

    /// Parse argument list: expr, expr, ... (the parentheses are handled by the caller)
    fn parse_argument_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();

        if self.check(&TokenKind::RParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);
            if !self.match_token(&TokenKind::Comma) {
                break;
            }
        }

        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::lexer::tokenize;
    use crate::parser::parse::{parse, ParseError};

    /// Parse `source` as a single expression statement.
    fn parse_expr(source: &str) -> Result<Expr, ParseError> {
        let program = parse(tokenize(&format!("{};", source)).unwrap())?;
        match program.body.into_iter().next() {
            Some(Stmt::ExprStmt(expr)) => Ok(expr),
            other => panic!("Expected expression statement, got {:?}", other),
        }
    }

    fn num(n: i64) -> Expr {
        Expr::literal(n)
    }

    fn var(name: &str) -> Expr {
        Expr::variable(name)
    }

    #[test]
    fn test_equal_precedence_groups_right() {
        assert_eq!(
            parse_expr("1 + 2 + 3").unwrap(),
            Expr::binary(
                BinaryOp::Add,
                num(1),
                Expr::binary(BinaryOp::Add, num(2), num(3)),
            )
        );
        assert_eq!(
            parse_expr("8 - 4 - 2").unwrap(),
            Expr::binary(
                BinaryOp::Sub,
                num(8),
                Expr::binary(BinaryOp::Sub, num(4), num(2)),
            )
        );
    }

    #[test]
    fn test_higher_precedence_binds_tighter() {
        assert_eq!(
            parse_expr("1 + 2 * 3").unwrap(),
            Expr::binary(
                BinaryOp::Add,
                num(1),
                Expr::binary(BinaryOp::Mul, num(2), num(3)),
            )
        );
        assert_eq!(
            parse_expr("1 * 2 + 3").unwrap(),
            Expr::binary(
                BinaryOp::Add,
                Expr::binary(BinaryOp::Mul, num(1), num(2)),
                num(3),
            )
        );
    }

    #[test]
    fn test_logical_and_comparison_levels() {
        assert_eq!(
            parse_expr("a < 1 || b == 2 && c").unwrap(),
            Expr::binary(
                BinaryOp::Or,
                Expr::binary(BinaryOp::Lt, var("a"), num(1)),
                Expr::binary(
                    BinaryOp::And,
                    Expr::binary(BinaryOp::Eq, var("b"), num(2)),
                    var("c"),
                ),
            )
        );
    }

    #[test]
    fn test_parentheses_override() {
        assert_eq!(
            parse_expr("(1 + 2) + 3").unwrap(),
            Expr::binary(
                BinaryOp::Add,
                Expr::binary(BinaryOp::Add, num(1), num(2)),
                num(3),
            )
        );
    }

    #[test]
    fn test_assignment_swallows_rest() {
        assert_eq!(
            parse_expr("x = y = 1 + 2").unwrap(),
            Expr::assign(
                "x",
                Expr::assign("y", Expr::binary(BinaryOp::Add, num(1), num(2))),
            )
        );
    }

    #[test]
    fn test_assignment_inside_expression() {
        assert_eq!(
            parse_expr("1 + x = 2").unwrap(),
            Expr::binary(BinaryOp::Add, num(1), Expr::assign("x", num(2)))
        );
    }

    #[test]
    fn test_calls() {
        assert_eq!(parse_expr("f()").unwrap(), Expr::call("f", vec![]));
        assert_eq!(
            parse_expr(r#"printf("%d %d", a, f(b))"#).unwrap(),
            Expr::call(
                "printf",
                vec![
                    Expr::string("%d %d"),
                    var("a"),
                    Expr::call("f", vec![var("b")]),
                ],
            )
        );
    }

    #[test]
    fn test_unclosed_call() {
        let err = parse_expr("f(1, 2").unwrap_err();
        assert_eq!(err.to_string(), "Expected RPAREN but got SEMICOLON at line 1");
    }

    #[test]
    fn test_unexpected_primary() {
        let err = parse_expr("1 + * 2").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected token in primary: STAR");
        assert_eq!(err.line(), 1);
    }

    #[test]
    fn test_keyword_in_expression_position() {
        let err = parse_expr("else").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected token in primary: ELSE");
    }
}
