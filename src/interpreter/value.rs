/// Persistent environments.
///
/// Defines `Environment`, the immutable identifier-to-binding map threaded
/// through evaluation. Every update yields a new environment that shares
/// structure with the previous one.
pub mod environment;
/// The print accumulator.
///
/// Defines `Output`, the append-only text buffer threaded alongside the
/// environment.
pub mod output;
/// Environment bindings.
///
/// Defines `Binding`, which is either a number or a procedure definition.
pub mod core;
