use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_condition,
            core::ParseResult,
            utils::{TokenCursor, is_identifier, is_number, parse_comma_separated},
        },
    },
    util::num::parse_literal,
};

/// Parses a primary expression.
///
/// Primary expressions are the operands of every binary operator:
/// - parenthesised conditions `( condition )`,
/// - assignments `x := condition`, which therefore chain to the right
///   without parentheses (`a := b := 4`),
/// - procedure calls `f(arg, ...)`,
/// - variable references,
/// - number literals.
///
/// After an identifier one more token decides between assignment, call and
/// variable reference.
///
/// # Errors
/// Returns a `ParseError` for any token that cannot start an expression,
/// for malformed assignments and calls, and for number literals too large to
/// represent.
pub fn parse_primary(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    match tokens.peek() {
        Some(Token::LParen) => {
            tokens.advance();
            let inner = parse_condition(tokens)?;
            tokens.expect(&Token::RParen)?;
            Ok(inner)
        },
        Some(Token::Word(word)) if is_identifier(word) => {
            let line = tokens.line();
            tokens.advance();
            parse_identifier_suffix(tokens, word.clone(), line)
        },
        Some(Token::Word(word)) if is_number(word) => {
            let value = parse_literal(word).ok_or_else(|| tokens.error("a number literal of finite size"))?;
            tokens.advance();
            Ok(Expr::Literal { value })
        },
        _ => Err(tokens.error("an expression")),
    }
}

/// Parses what follows an identifier: `:=` for assignment, `(` for a call,
/// or nothing for a variable reference.
fn parse_identifier_suffix(tokens: &mut TokenCursor<'_>,
                           name: String,
                           line: usize)
                           -> ParseResult<Expr> {
    match tokens.peek() {
        Some(Token::Colon) => {
            tokens.advance();
            tokens.expect(&Token::Equal)?;
            let value = parse_condition(tokens)?;
            Ok(Expr::Assignment { name,
                                  value: Box::new(value) })
        },
        Some(Token::LParen) => {
            tokens.advance();
            let arguments = parse_comma_separated(tokens, parse_condition, &Token::RParen)?;
            Ok(Expr::Call { name,
                            arguments,
                            line })
        },
        _ => Ok(Expr::Variable { name, line }),
    }
}
