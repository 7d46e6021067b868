/// Core parsing entry point.
///
/// Defines the `ParseResult` alias and `parse`, which turns a full token
/// sequence into a program and rejects leftover tokens.
pub mod core;

/// Statement parsing.
///
/// Handles statement sequences, procedure definitions, conditionals, loops,
/// print statements and braced blocks.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the precedence levels from comparisons down to exponentiation.
pub mod binary;

/// Primary expression parsing.
///
/// Parses parenthesised conditions, assignments, calls, variables and number
/// literals.
pub mod primary;

/// Utility functions for the parser.
///
/// Provides the token cursor, identifier and number shape checks, and list
/// parsing helpers.
pub mod utils;
