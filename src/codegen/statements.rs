//! Statement emission
//!
//! Every statement becomes one or more whole lines. Control-flow headers are
//! followed either by a brace-delimited block (when the body was a `Block`) or
//! by the single body statement on the next line, one level deeper.

use super::expressions::render;
use super::{CodegenError, Emitter};
use crate::parser::ast::*;

impl Emitter {
    /// Top-level items may be function definitions; nested ones may not.
    pub(crate) fn emit_top_level(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match stmt {
            Stmt::Function { name, params, body } => {
                self.line(format!("function {}({}) {{", name, params.join(", ")));
                self.emit_block_contents(body)?;
                self.line("}");
                Ok(())
            }
            other => self.emit_stmt(other),
        }
    }

    pub(crate) fn emit_stmt(&mut self, stmt: &Stmt) -> Result<(), CodegenError> {
        match stmt {
            Stmt::VarDecl { name, init } => {
                self.line(format!("let {} = {};", name, render(init)));
            }
            Stmt::ExprStmt(expr) => {
                self.line(format!("{};", render(expr)));
            }
            Stmt::Return(expr) => {
                self.line(format!("return {};", render(expr)));
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.emit_if("", condition, then_branch, else_branch.as_deref())?;
            }
            Stmt::While { condition, body } => {
                let header = format!("while ({})", render(condition));
                self.emit_body(&header, body)?;
                self.close_body(body);
            }
            Stmt::For {
                init,
                condition,
                update,
                body,
            } => {
                let init = match init.as_deref() {
                    None => String::new(),
                    Some(Stmt::VarDecl { name, init }) => format!("let {} = {}", name, render(init)),
                    Some(Stmt::ExprStmt(expr)) => render(expr),
                    Some(other) => return Err(CodegenError::UnknownStmt(other.kind_name())),
                };
                let header = format!(
                    "for ({}; {}; {})",
                    init,
                    render(condition),
                    render(update)
                );
                self.emit_body(&header, body)?;
                self.close_body(body);
            }
            Stmt::Block(statements) => {
                self.line("{");
                self.emit_block_contents(statements)?;
                self.line("}");
            }
            Stmt::Function { .. } => {
                return Err(CodegenError::UnknownStmt(stmt.kind_name()));
            }
        }
        Ok(())
    }

    /// Emit an `if`, with `prefix` glued in front of the keyword so that
    /// `else if` chains stay on one line.
    fn emit_if(
        &mut self,
        prefix: &str,
        condition: &Expr,
        then_branch: &Stmt,
        else_branch: Option<&Stmt>,
    ) -> Result<(), CodegenError> {
        let header = format!("{}if ({})", prefix, render(condition));
        self.emit_body(&header, then_branch)?;

        let Some(else_branch) = else_branch else {
            self.close_body(then_branch);
            return Ok(());
        };

        let else_prefix = if matches!(then_branch, Stmt::Block(_)) {
            "} else"
        } else {
            "else"
        };

        match else_branch {
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => self.emit_if(
                &format!("{} ", else_prefix),
                condition,
                then_branch,
                else_branch.as_deref(),
            ),
            other => {
                self.emit_body(else_prefix, other)?;
                self.close_body(other);
                Ok(())
            }
        }
    }

    /// Emit `header` and the body below it. A block body leaves its closing
    /// brace to [`Emitter::close_body`] so that `} else` can share the line.
    fn emit_body(&mut self, header: &str, body: &Stmt) -> Result<(), CodegenError> {
        match body {
            Stmt::Block(statements) => {
                self.line(format!("{} {{", header));
                self.emit_block_contents(statements)
            }
            other => {
                self.line(header);
                self.indent();
                let result = self.emit_stmt(other);
                self.dedent();
                result
            }
        }
    }

    fn close_body(&mut self, body: &Stmt) {
        if matches!(body, Stmt::Block(_)) {
            self.line("}");
        }
    }

    fn emit_block_contents(&mut self, statements: &[Stmt]) -> Result<(), CodegenError> {
        self.indent();
        let result = statements.iter().try_for_each(|stmt| self.emit_stmt(stmt));
        self.dedent();
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::codegen::{generate, CodegenError};
    use crate::parser::ast::*;

    fn emit(body: Vec<Stmt>) -> String {
        generate(&Program::new(body)).unwrap()
    }

    fn x() -> Expr {
        Expr::variable("x")
    }

    #[test]
    fn test_simple_statements() {
        let js = emit(vec![
            Stmt::var_decl("x", Expr::literal(1)),
            Stmt::expr(Expr::assign("x", Expr::literal(2))),
            Stmt::ret(x()),
        ]);
        assert_eq!(js, "let x = 1;\nx = 2;\nreturn x;");
    }

    #[test]
    fn test_if_without_braces() {
        let js = emit(vec![Stmt::if_else(
            x(),
            Stmt::ret(Expr::literal(1)),
            Some(Stmt::ret(Expr::literal(2))),
        )]);
        assert_eq!(js, "if (x)\n    return 1;\nelse\n    return 2;");
    }

    #[test]
    fn test_if_with_blocks() {
        let js = emit(vec![Stmt::if_else(
            x(),
            Stmt::block(vec![Stmt::ret(Expr::literal(1))]),
            Some(Stmt::block(vec![Stmt::ret(Expr::literal(2))])),
        )]);
        assert_eq!(
            js,
            "if (x) {\n    return 1;\n} else {\n    return 2;\n}"
        );
    }

    #[test]
    fn test_else_if_chain() {
        let js = emit(vec![Stmt::if_else(
            x(),
            Stmt::block(vec![Stmt::ret(Expr::literal(1))]),
            Some(Stmt::if_else(
                Expr::variable("y"),
                Stmt::block(vec![Stmt::ret(Expr::literal(2))]),
                Some(Stmt::block(vec![Stmt::ret(Expr::literal(3))])),
            )),
        )]);
        assert_eq!(
            js,
            "if (x) {\n    return 1;\n} else if (y) {\n    return 2;\n} else {\n    return 3;\n}"
        );
    }

    #[test]
    fn test_mixed_branch_shapes() {
        let js = emit(vec![Stmt::if_else(
            x(),
            Stmt::ret(Expr::literal(1)),
            Some(Stmt::block(vec![])),
        )]);
        assert_eq!(js, "if (x)\n    return 1;\nelse {\n}");
    }

    #[test]
    fn test_while_loops() {
        let js = emit(vec![
            Stmt::while_loop(x(), Stmt::expr(Expr::call("f", vec![]))),
            Stmt::while_loop(x(), Stmt::block(vec![Stmt::expr(Expr::call("g", vec![]))])),
        ]);
        assert_eq!(js, "while (x)\n    f();\nwhile (x) {\n    g();\n}");
    }

    #[test]
    fn test_for_headers() {
        let cond = Expr::binary(BinaryOp::Lt, Expr::variable("i"), Expr::literal(3));
        let update = Expr::assign(
            "i",
            Expr::binary(BinaryOp::Add, Expr::variable("i"), Expr::literal(1)),
        );
        let js = emit(vec![
            Stmt::for_loop(
                Some(Stmt::var_decl("i", Expr::literal(0))),
                cond.clone(),
                update.clone(),
                Stmt::block(vec![]),
            ),
            Stmt::for_loop(
                Some(Stmt::expr(Expr::assign("i", Expr::literal(0)))),
                cond.clone(),
                update.clone(),
                Stmt::expr(Expr::call("f", vec![])),
            ),
            Stmt::for_loop(None, cond, update, Stmt::block(vec![])),
        ]);
        assert_eq!(
            js,
            "for (let i = 0; (i < 3); i = (i + 1)) {\n}\n\
             for (i = 0; (i < 3); i = (i + 1))\n    f();\n\
             for (; (i < 3); i = (i + 1)) {\n}"
        );
    }

    #[test]
    fn test_for_init_must_be_simple() {
        let program = Program::new(vec![Stmt::for_loop(
            Some(Stmt::block(vec![])),
            x(),
            x(),
            Stmt::block(vec![]),
        )]);
        assert_eq!(
            generate(&program).unwrap_err(),
            CodegenError::UnknownStmt("Block")
        );
    }

    #[test]
    fn test_nested_blocks_indent() {
        let js = emit(vec![Stmt::function(
            "main",
            vec![],
            vec![Stmt::while_loop(
                x(),
                Stmt::block(vec![Stmt::if_else(
                    x(),
                    Stmt::ret(Expr::literal(1)),
                    None,
                )]),
            )],
        )]);
        assert_eq!(
            js,
            "function main() {\n    while (x) {\n        if (x)\n            return 1;\n    }\n}\nmain();"
        );
    }

    #[test]
    fn test_function_params() {
        let js = emit(vec![Stmt::function(
            "add",
            vec!["a".to_string(), "b".to_string()],
            vec![],
        )]);
        assert_eq!(js, "function add(a, b) {\n}");
    }
}
