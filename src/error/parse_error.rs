use crate::interpreter::lexer::Position;

/// Describes why a token sequence is not a program.
///
/// Every parse failure, whether a token is unexpected, missing, or has the
/// wrong shape for an identifier or number, is reported with this single
/// type: what the parser was looking for, what it saw instead, and where.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error on {position}: expected {expected}, found {found}.")]
pub struct ParseError {
    /// Description of the token or construct the grammar required.
    pub expected: String,
    /// The offending token text, or `end of input`.
    pub found:    String,
    /// Position of the offending token (one past the last token at end of
    /// input).
    pub position: Position,
}

impl ParseError {
    /// Text used for [`ParseError::found`] when the tokens ran out.
    pub const END_OF_INPUT: &'static str = "end of input";

    /// Returns `true` if the parser ran out of tokens.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.found == Self::END_OF_INPUT
    }
}
