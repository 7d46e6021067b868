/// Core evaluation logic for expressions.
///
/// Defines the `Evaluate` trait, the `Evaluation` triple of value,
/// environment and output, and the `Fatal` error that carries partial output.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic and comparisons on numbers, including the NaN
/// results of division by zero and invalid powers.
pub mod binary;

/// Procedure calls.
///
/// Checks the call target, evaluates arguments, and runs the body in a fresh
/// parameter-only environment.
pub mod call;

/// Statement evaluation.
///
/// Runs sequences, procedure definitions, conditionals, loops and prints
/// without recursing on sequence length or loop iterations.
pub mod statement;
