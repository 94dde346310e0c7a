// AST (Abstract Syntax Tree) definitions for the translator
//
// Nodes are plain owned values built bottom-up by the parser through the
// constructor functions below; nothing holds a node by reference once it has
// been placed in its parent.

use crate::parser::lexer::TokenKind;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::LazyLock;

/// Binding power of each binary operator; higher binds tighter.
static PRECEDENCE: LazyLock<FxHashMap<BinaryOp, u8>> = LazyLock::new(|| {
    use BinaryOp::*;
    [
        (Or, 1),
        (And, 2),
        (Eq, 3),
        (Ne, 3),
        (Lt, 4),
        (Gt, 4),
        (Le, 4),
        (Ge, 4),
        (Add, 5),
        (Sub, 5),
        (Mul, 6),
        (Div, 6),
        (Mod, 6),
    ]
    .into_iter()
    .collect()
});

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Logical
    Or,
    And,
    // Comparison
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// Map an operator token to its binary operator, if it is one.
    pub fn from_token(kind: &TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::OrOr => BinaryOp::Or,
            TokenKind::AndAnd => BinaryOp::And,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::Ne,
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::Le => BinaryOp::Le,
            TokenKind::Ge => BinaryOp::Ge,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash => BinaryOp::Div,
            TokenKind::Percent => BinaryOp::Mod,
            _ => return None,
        };
        Some(op)
    }

    pub fn precedence(self) -> u8 {
        PRECEDENCE[&self]
    }

    /// Operator spelling, shared by C and JavaScript.
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(i64),
    /// Raw text between the quotes, escapes untouched
    StringLiteral(String),
    Variable(String),
    Assign {
        name: String,
        value: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn literal(value: i64) -> Self {
        Expr::Literal(value)
    }

    pub fn string(raw: impl Into<String>) -> Self {
        Expr::StringLiteral(raw.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            name: name.into(),
            value: Box::new(value),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn call(callee: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: callee.into(),
            args,
        }
    }

    /// Node kind name, as used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Literal(_) => "Literal",
            Expr::StringLiteral(_) => "StringLiteral",
            Expr::Variable(_) => "Variable",
            Expr::Assign { .. } => "Assign",
            Expr::Binary { .. } => "Binary",
            Expr::Call { .. } => "Call",
        }
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    VarDecl {
        name: String,
        init: Expr,
    },
    ExprStmt(Expr),
    Return(Expr),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    For {
        /// Either a `VarDecl` or an `ExprStmt` when present
        init: Option<Box<Stmt>>,
        condition: Expr,
        update: Expr,
        body: Box<Stmt>,
    },
    Block(Vec<Stmt>),
    Function {
        name: String,
        params: Vec<String>,
        body: Vec<Stmt>,
    },
}

impl Stmt {
    pub fn var_decl(name: impl Into<String>, init: Expr) -> Self {
        Stmt::VarDecl {
            name: name.into(),
            init,
        }
    }

    pub fn expr(expr: Expr) -> Self {
        Stmt::ExprStmt(expr)
    }

    pub fn ret(expr: Expr) -> Self {
        Stmt::Return(expr)
    }

    pub fn if_else(condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Self {
        Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn for_loop(init: Option<Stmt>, condition: Expr, update: Expr, body: Stmt) -> Self {
        Stmt::For {
            init: init.map(Box::new),
            condition,
            update,
            body: Box::new(body),
        }
    }

    pub fn block(statements: Vec<Stmt>) -> Self {
        Stmt::Block(statements)
    }

    pub fn function(name: impl Into<String>, params: Vec<String>, body: Vec<Stmt>) -> Self {
        Stmt::Function {
            name: name.into(),
            params,
            body,
        }
    }

    /// Node kind name, as used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::VarDecl { .. } => "VarDecl",
            Stmt::ExprStmt(_) => "ExprStmt",
            Stmt::Return(_) => "Return",
            Stmt::If { .. } => "If",
            Stmt::While { .. } => "While",
            Stmt::For { .. } => "For",
            Stmt::Block(_) => "Block",
            Stmt::Function { .. } => "Function",
        }
    }
}

/// Complete program: the ordered top-level items.
///
/// Items are usually `Function`s, but any statement is accepted at the top
/// level and kept in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn new(body: Vec<Stmt>) -> Self {
        Self { body }
    }

    /// Whether a top-level `main` function is defined.
    pub fn has_main(&self) -> bool {
        self.body
            .iter()
            .any(|item| matches!(item, Stmt::Function { name, .. } if name == "main"))
    }
}
