/// Represents the errors that abort a running program.
///
/// All runtime errors are fatal: evaluation stops at the failing node. The
/// output printed up to that point travels with the error (see
/// [`crate::error::Error::Runtime`]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// A variable or procedure name has no binding in the current
    /// environment.
    #[error("Error on line {line}: Unbound identifier '{name}'.")]
    UnboundIdentifier {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call targets a name bound to a number.
    #[error("Error on line {line}: '{name}' is not a procedure.")]
    NotAProcedure {
        /// The name of the call target.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable reference resolves to a procedure instead of a number.
    #[error("Error on line {line}: Procedure '{name}' used as a number.")]
    NotANumber {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A procedure was called with the wrong number of arguments.
    #[error("Error on line {line}: Procedure '{name}' expects {expected} argument(s), but {found} were supplied.")]
    ArityMismatch {
        /// The name of the procedure.
        name:     String,
        /// Number of formal parameters.
        expected: usize,
        /// Number of arguments at the call site.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl RuntimeError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnboundIdentifier { line, .. }
            | Self::NotAProcedure { line, .. }
            | Self::NotANumber { line, .. }
            | Self::ArityMismatch { line, .. } => *line,
        }
    }
}
