use quiver_binder::{bind, Program};
use quiver_eval::{run_all, TestResults};
use quiver_lexer::{scan, Lexeme};
use quiver_parser::parse_program;
use quiver_types::ast::Ast;
use quiver_types::{Diagnostic, SourceFile};
use serde::Serialize;
use tracing::debug;

use crate::error::CompileError;
use crate::fingerprint::fingerprint;

/// Everything the pipeline produced for one source text.
///
/// Stages run in order and stop at the first failure: outputs of stages
/// that did not run are `None` and `diagnostic` describes the failure.
#[derive(Debug, Clone, Serialize)]
pub struct CompileOutput {
    /// SHA-256 of the source this output belongs to.
    pub fingerprint: String,
    pub lexemes: Option<Vec<Lexeme>>,
    pub ast: Option<Ast>,
    pub program: Option<Program>,
    pub results: Option<TestResults>,
    pub diagnostic: Option<Diagnostic>,
}

impl CompileOutput {
    /// True when every stage ran.
    pub fn is_success(&self) -> bool {
        self.diagnostic.is_none()
    }

    /// True when every stage ran and every test verdict is `Ok`.
    pub fn all_tests_passed(&self) -> bool {
        self.is_success() && self.results.as_ref().is_some_and(|r| r.failed() == 0)
    }
}

/// Run the whole pipeline over a source string.
pub fn compile(source: &str) -> CompileOutput {
    compile_source(&SourceFile::new("input.quiver", source))
}

/// Run the whole pipeline over a named source file.
pub fn compile_source(file: &SourceFile) -> CompileOutput {
    let span = tracing::debug_span!("compile", file = %file.name, fingerprint = tracing::field::Empty);
    let _guard = span.enter();

    let mut output = CompileOutput {
        fingerprint: fingerprint(&file.source),
        lexemes: None,
        ast: None,
        program: None,
        results: None,
        diagnostic: None,
    };
    span.record("fingerprint", output.fingerprint.as_str());

    let lexemes = match scan(&file.source) {
        Ok(lexemes) => lexemes,
        Err(e) => {
            output.diagnostic = Some(fail(e.into(), file, &[]));
            return output;
        }
    };
    debug!(lexemes = lexemes.len(), "scanned");
    output.lexemes = Some(lexemes.clone());

    let ast = match parse_program(lexemes.iter().map(|l| l.token.clone()).collect()) {
        Ok(ast) => ast,
        Err(e) => {
            output.diagnostic = Some(fail(e.into(), file, &lexemes));
            return output;
        }
    };
    debug!(definitions = ast.len(), "parsed");

    let program = match bind(&ast) {
        Ok(program) => program,
        Err(e) => {
            output.ast = Some(ast);
            output.diagnostic = Some(fail(e.into(), file, &lexemes));
            return output;
        }
    };
    debug!(
        states = program.state().len(),
        actions = program.actions().len(),
        tests = program.test_count(),
        "bound"
    );

    let results = run_all(&program);
    debug!(passed = results.passed(), failed = results.failed(), "tests finished");

    output.ast = Some(ast);
    output.program = Some(program);
    output.results = Some(results);
    output
}

/// Lex, parse, and bind without running tests.
pub fn compile_program(source: &str) -> Result<Program, CompileError> {
    let tokens = scan(source)?.into_iter().map(|l| l.token).collect();
    let ast = parse_program(tokens)?;
    Ok(bind(&ast)?)
}

fn fail(error: CompileError, file: &SourceFile, lexemes: &[Lexeme]) -> Diagnostic {
    debug!(code = %error.code(), "stage failed: {error}");
    error.to_diagnostic(file, lexemes)
}
