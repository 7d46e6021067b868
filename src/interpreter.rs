/// The evaluator module executes AST nodes.
///
/// The evaluator walks the AST, threading an environment and an output
/// buffer through every node, and reports fatal runtime errors such as
/// unbound identifiers or arity mismatches.
///
/// # Responsibilities
/// - Evaluates statements and expressions in a fixed left-to-right order.
/// - Implements the procedure call discipline.
/// - Keeps native stack use independent of loop counts and program length.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces punctuation tokens and
/// unclassified words, each with its source position.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser over a forward-only cursor. It
/// classifies words as keywords, identifiers or number literals and reports
/// any mismatch as a `ParseError`.
pub mod parser;
/// The value module defines the runtime state threaded through evaluation.
///
/// This module declares bindings, the persistent environment, and the output
/// accumulator.
pub mod value;
