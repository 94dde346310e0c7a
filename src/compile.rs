//! Single entry point composing lexer, parser and code generator

use crate::codegen::generate;
use crate::error::CompileError;
use crate::parser::{parse, tokenize};

/// Translate C-subset `source` into JavaScript.
///
/// The first error from any stage aborts the call; no partial output is
/// produced. Each call is independent and holds no shared state.
pub fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = tokenize(source)?;
    log::debug!("tokenized {} tokens", tokens.len());

    let program = parse(tokens)?;
    let js = generate(&program)?;

    log::debug!("compiled {} bytes of source into {} bytes", source.len(), js.len());
    Ok(js)
}

/// Syntax check only: compile and discard the output.
pub fn check(source: &str) -> Result<(), CompileError> {
    compile(source).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_compile_hello() {
        let js = compile("#include <stdio.h>\nint main() {\n    printf(\"Hello\");\n    return 0;\n}\n")
            .unwrap();
        assert_eq!(
            js,
            "function main() {\n    console.log(\"Hello\");\n    return 0;\n}\nmain();"
        );
    }

    #[test]
    fn test_check_reports_first_error() {
        let err = check("int main() {\n  x = 1 @ 2;\n  return\n}").unwrap_err();
        assert!(matches!(err, CompileError::Lex(_)));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_check_accepts_valid_input() {
        assert!(check("int main() { return 0; }").is_ok());
    }
}
