use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Lexeme,
        parser::{statement::parse_program, utils::TokenCursor},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// This is the entry point for parsing. The whole token sequence must form
/// one program; tokens left over after the last statement are an error.
///
/// Grammar: `program := statement (";" statement)*`
///
/// # Errors
/// Returns the first `ParseError` encountered. Parsing does not recover.
///
/// # Example
/// ```
/// use while_lang::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let program = parse(&tokenize("x := 1 + 2 * 3; print x")).unwrap();
/// assert_eq!(program.to_string(), "(x := (1.0+(2.0*3.0))); print x");
///
/// assert!(parse(&tokenize("print")).is_err());
/// ```
pub fn parse(lexemes: &[Lexeme]) -> ParseResult<Statement> {
    let mut tokens = TokenCursor::new(lexemes);
    let program = parse_program(&mut tokens)?;

    if !tokens.is_at_end() {
        return Err(tokens.error("';' or end of input"));
    }

    Ok(program)
}
