//! Expression rendering
//!
//! Expressions render to a single line of JavaScript. Every binary operation
//! is wrapped in parentheses, so the grouping chosen by the parser survives
//! into the output regardless of JavaScript's own precedence rules.

use crate::parser::ast::*;
use std::fmt::Write;

/// Callee rewritten to the host's console output intrinsic.
const PRINTF: &str = "printf";
const CONSOLE_LOG: &str = "console.log";

/// Render `expr` as JavaScript.
pub(crate) fn render(expr: &Expr) -> String {
    match expr {
        Expr::Literal(value) => value.to_string(),
        Expr::StringLiteral(raw) => quote_string(raw),
        Expr::Variable(name) => name.clone(),
        Expr::Assign { name, value } => format!("{} = {}", name, render(value)),
        Expr::Binary { op, left, right } => {
            format!("({} {} {})", operand(left), op, operand(right))
        }
        Expr::Call { callee, args } => {
            // printf keeps every argument, format string included; the
            // specifiers are not interpreted
            let callee = if callee == PRINTF { CONSOLE_LOG } else { callee.as_str() };
            let args: Vec<String> = args.iter().map(render).collect();
            format!("{}({})", callee, args.join(", "))
        }
    }
}

/// An assignment used as a binary operand needs its own parentheses to stay
/// a valid JavaScript expression.
fn operand(expr: &Expr) -> String {
    match expr {
        Expr::Assign { .. } => format!("({})", render(expr)),
        other => render(other),
    }
}

/// Quote `raw` as a JavaScript string literal.
///
/// Escaping follows `JSON.stringify`: quotes, backslashes and control
/// characters are escaped, everything else is copied. Backslashes in the C
/// source were never interpreted, so they are escaped like any other.
pub fn quote_string(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for ch in raw.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
