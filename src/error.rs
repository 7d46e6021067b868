/// Parsing errors.
///
/// Defines the single error type produced while turning tokens into a
/// program: unexpected or missing tokens and malformed identifiers or number
/// literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the fatal errors raised during evaluation: unbound identifiers,
/// calls to things that are not procedures, and arity mismatches.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The three categories every failure falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source is not a well-formed program; nothing was evaluated.
    Parse,
    /// A variable or procedure lookup failed at runtime.
    UnboundIdentifier,
    /// A call target is not a procedure, a procedure was used as a number,
    /// or the argument count does not match.
    ArityOrKind,
}

/// The error channel shared by parsing and evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The program could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation aborted.
    #[error("{error}")]
    Runtime {
        /// What went wrong.
        error:  RuntimeError,
        /// Everything printed before the error.
        output: String,
    },
}

impl Error {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime { error: RuntimeError::UnboundIdentifier { .. },
                            .. } => ErrorKind::UnboundIdentifier,
            Self::Runtime { .. } => ErrorKind::ArityOrKind,
        }
    }

    /// Output printed before evaluation stopped, if evaluation started.
    #[must_use]
    pub fn partial_output(&self) -> Option<&str> {
        match self {
            Self::Parse(_) => None,
            Self::Runtime { output, .. } => Some(output.as_str()),
        }
    }
}
