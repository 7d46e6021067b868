use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexeme, Position, Token},
        parser::core::ParseResult,
    },
};

/// Words that introduce statements and can never name a variable or
/// procedure.
pub const KEYWORDS: [&str; 5] = ["proc", "if", "else", "while", "print"];

/// Returns `true` if `word` can name a variable or procedure.
///
/// An identifier starts with a letter or `_`, continues with letters, digits
/// or `_`, and is not a keyword.
///
/// # Example
/// ```
/// use while_lang::interpreter::parser::utils::is_identifier;
///
/// assert!(is_identifier("_count2"));
/// assert!(!is_identifier("2count"));
/// assert!(!is_identifier("while"));
/// ```
#[must_use]
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
    && chars.all(|c| c.is_alphanumeric() || c == '_')
    && !KEYWORDS.contains(&word)
}

/// Returns `true` if `word` has the shape of a number literal: digits,
/// optionally followed by a single `.` and more digits. Signs and exponents
/// are not part of a literal.
///
/// # Example
/// ```
/// use while_lang::interpreter::parser::utils::is_number;
///
/// assert!(is_number("42"));
/// assert!(is_number("3.25"));
/// assert!(!is_number("3."));
/// assert!(!is_number("1e5"));
/// ```
#[must_use]
pub fn is_number(word: &str) -> bool {
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    match word.split_once('.') {
        Some((integral, fraction)) => all_digits(integral) && all_digits(fraction),
        None => all_digits(word),
    }
}

/// A forward-only cursor over the lexemes of one program.
///
/// The parser looks at most one token ahead and never backtracks.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    lexemes: &'a [Lexeme],
    index:   usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor at the first lexeme.
    #[must_use]
    pub const fn new(lexemes: &'a [Lexeme]) -> Self {
        Self { lexemes, index: 0 }
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Token> {
        self.lexemes.get(self.index).map(|lexeme| &lexeme.token)
    }

    /// Returns `true` if the next token equals `token`.
    #[must_use]
    pub fn check(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    /// Returns `true` if the next token is the word `word`.
    #[must_use]
    pub fn check_word(&self, word: &str) -> bool {
        self.peek().is_some_and(|token| token.is_word(word))
    }

    /// Consumes and returns the next lexeme.
    pub fn advance(&mut self) -> Option<&'a Lexeme> {
        let lexeme = self.lexemes.get(self.index)?;
        self.index += 1;
        Some(lexeme)
    }

    /// Returns `true` once every lexeme has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.index >= self.lexemes.len()
    }

    /// Position of the next token; at end of input, one past the last token.
    #[must_use]
    pub fn position(&self) -> Position {
        match self.lexemes.get(self.index) {
            Some(lexeme) => lexeme.position,
            None => Position { line:  self.lexemes.last().map_or(1, |last| last.position.line),
                               index: self.lexemes.len(), },
        }
    }

    /// Source line of the next token.
    #[must_use]
    pub fn line(&self) -> usize {
        self.position().line
    }

    /// Builds an error saying `expected` was required at the current
    /// position.
    #[must_use]
    pub fn error(&self, expected: impl Into<String>) -> ParseError {
        let found = self.peek()
                        .map_or_else(|| ParseError::END_OF_INPUT.to_string(), |token| {
                            format!("'{token}'")
                        });
        ParseError { expected: expected.into(),
                     found,
                     position: self.position() }
    }

    /// Consumes the next token if it equals `token`.
    ///
    /// # Errors
    /// Returns a `ParseError` naming `token` if anything else comes next.
    pub fn expect(&mut self, token: &Token) -> ParseResult<()> {
        if self.check(token) {
            self.index += 1;
            Ok(())
        } else {
            Err(self.error(format!("'{token}'")))
        }
    }

    /// Consumes the next token if it is the word `word`.
    ///
    /// # Errors
    /// Returns a `ParseError` naming `word` if anything else comes next.
    pub fn expect_word(&mut self, word: &str) -> ParseResult<()> {
        if self.check_word(word) {
            self.index += 1;
            Ok(())
        } else {
            Err(self.error(format!("'{word}'")))
        }
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier (including
/// keywords and end of input).
pub fn parse_identifier(tokens: &mut TokenCursor<'_>) -> ParseResult<String> {
    match tokens.peek() {
        Some(Token::Word(word)) if is_identifier(word) => {
            tokens.advance();
            Ok(word.clone())
        },
        _ => Err(tokens.error("an identifier")),
    }
}

/// Parses a comma-separated list of items up to and including a closing
/// token.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, or if an item is
/// followed by anything other than `,` or the closing token.
pub fn parse_comma_separated<'a, T>(tokens: &mut TokenCursor<'a>,
                                    parse_item: impl Fn(&mut TokenCursor<'a>) -> ParseResult<T>,
                                    closing: &Token)
                                    -> ParseResult<Vec<T>> {
    let mut items = Vec::new();
    if tokens.check(closing) {
        tokens.advance();
        return Ok(items);
    }

    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some(Token::Comma) => {
                tokens.advance();
            },
            Some(token) if token == closing => {
                tokens.advance();
                break;
            },
            _ => return Err(tokens.error(format!("',' or '{closing}'"))),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    #[test]
    fn identifier_shapes() {
        assert!(is_identifier("x"));
        assert!(is_identifier("printer"));
        assert!(!is_identifier("x.y"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("proc"));
        assert!(!is_identifier("éx"));
        assert!(is_identifier("xé"));
    }

    #[test]
    fn number_shapes() {
        assert!(is_number("0"));
        assert!(is_number("007.50"));
        assert!(!is_number(".5"));
        assert!(!is_number("1.2.3"));
        assert!(!is_number("12a"));
    }

    #[test]
    fn end_of_input_points_past_the_last_token() {
        let lexemes = tokenize("a\nb");
        let mut cursor = TokenCursor::new(&lexemes);
        cursor.advance();
        cursor.advance();

        let error = cursor.error("';'");
        assert!(error.is_end_of_input());
        assert_eq!(error.position, Position { line: 2, index: 2 });
    }

    #[test]
    fn expect_reports_the_offending_token() {
        let lexemes = tokenize(")");
        let mut cursor = TokenCursor::new(&lexemes);

        let error = cursor.expect(&Token::LParen).unwrap_err();
        assert_eq!(error.expected, "'('");
        assert_eq!(error.found, "')'");
    }
}
