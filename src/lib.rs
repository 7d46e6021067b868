//! # while-lang
//!
//! while-lang is a front end and evaluator for a small imperative teaching
//! language with arithmetic, comparisons, assignment, conditionals, loops,
//! procedures and a print statement.
//!
//! Source text goes through three phases: tokenization, recursive-descent
//! parsing into an abstract syntax tree, and tree-walking evaluation that
//! threads an environment and an output buffer through every node.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use crate::{
    ast::Statement,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Evaluate,
        lexer,
        parser,
        value::{environment::Environment, output::Output},
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the `Statement` and `Expr` enums that represent a
/// program as a tree, together with the canonical textual rendering used for
/// diagnostics. The AST is built by the parser and traversed by the
/// evaluator; it is never modified after parsing.
pub mod ast;
/// Provides the unified error type for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ParseError` for malformed programs.
/// - Defines `RuntimeError` for fatal evaluation failures.
/// - Joins both in `Error`, which also carries the output printed before a
///   runtime failure.
pub mod error;
/// Orchestrates the phases of execution.
///
/// This module ties together lexing, parsing, evaluation and the runtime
/// state types.
pub mod interpreter;
/// Number formatting and literal helpers.
pub mod util;

/// The result of running a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// Canonical rendering of the parsed program.
    pub ast_rendering: String,
    /// Everything the program printed.
    pub output:        String,
}

/// Splits source text into token strings.
///
/// # Example
/// ```
/// assert_eq!(while_lang::tokenize("print 1+2"), ["print", "1", "+", "2"]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<String> {
    lexer::tokenize(source).into_iter()
                           .map(|lexeme| lexeme.token.to_string())
                           .collect()
}

/// Parses source text into a program.
///
/// # Example
/// ```
/// let program = while_lang::parse("a := b := 4").unwrap();
/// assert_eq!(program.to_string(), "(a := (b := 4.0))");
/// ```
pub fn parse(source: &str) -> Result<Statement, ParseError> {
    let lexemes = lexer::tokenize(source);
    log::debug!("lexed {} token(s)", lexemes.len());

    let program = parser::core::parse(&lexemes)?;
    log::debug!("parsed program: {program}");
    Ok(program)
}

/// Evaluates a parsed program from an empty environment and returns its
/// output.
///
/// # Errors
/// Returns `Error::Runtime` if evaluation aborts. The error holds the output
/// produced before the failure.
pub fn execute(program: &Statement) -> Result<String, Error> {
    let evaluation = program.evaluate(Environment::new(), Output::new())?;
    log::debug!("program finished with {} binding(s)", evaluation.env.len());
    Ok(evaluation.out.into_string())
}

/// Parses and evaluates a program.
///
/// On success, returns the canonical rendering of the parsed program and
/// the printed output.
///
/// # Errors
/// - `Error::Parse` if the source is not a well-formed program; nothing is
///   evaluated.
/// - `Error::Runtime` if evaluation aborts on an unbound identifier, a call
///   to something that is not a procedure, or an arity mismatch.
///
/// # Examples
/// ```
/// use while_lang::{error::ErrorKind, run};
///
/// let result = run("proc f(a, b) { print a + b }; f(2, 3)").unwrap();
/// assert_eq!(result.output, "5.0\n");
///
/// let error = run("print 1; g(1)").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::UnboundIdentifier);
/// assert_eq!(error.partial_output(), Some("1.0\n"));
/// ```
pub fn run(source: &str) -> Result<RunOutput, Error> {
    let program = parse(source)?;
    let output = execute(&program)?;

    Ok(RunOutput { ast_rendering: program.to_string(),
                   output })
}
