use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary, utils::TokenCursor},
    },
};

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right) }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that are not operators.
///
/// # Example
/// ```
/// use while_lang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Colon), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::Equal => Some(BinaryOperator::Equal),
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Returns the operator behind the next token if it belongs to `level`.
fn peek_operator(tokens: &TokenCursor<'_>, level: &[BinaryOperator]) -> Option<BinaryOperator> {
    tokens.peek()
          .and_then(token_to_binary_operator)
          .filter(|op| level.contains(op))
}

/// Parses a condition: an expression with at most one comparison.
///
/// Comparisons do not chain; in `a < b < c` the second `<` is left for the
/// caller, which rejects it.
///
/// The rule is: `condition := additive (("<" | ">" | "=") additive)?`
pub fn parse_condition(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let left = parse_additive(tokens)?;
    let Some(op) = peek_operator(tokens, &[BinaryOperator::Less,
                                           BinaryOperator::Greater,
                                           BinaryOperator::Equal])
    else {
        return Ok(left);
    };

    tokens.advance();
    let right = parse_additive(tokens)?;
    Ok(binary(left, op, right))
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(tokens)?;
    while let Some(op) = peek_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        tokens.advance();
        let right = parse_multiplicative(tokens)?;
        left = binary(left, op, right);
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// The rule is: `multiplicative := power (("*" | "/") power)*`
pub fn parse_multiplicative(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_power(tokens)?;
    while let Some(op) = peek_operator(tokens, &[BinaryOperator::Mul, BinaryOperator::Div]) {
        tokens.advance();
        let right = parse_power(tokens)?;
        left = binary(left, op, right);
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as
/// `a ^ (b ^ c)`.
///
/// The rule is: `power := primary ("^" power)?`
pub fn parse_power(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let base = parse_primary(tokens)?;
    if !tokens.check(&Token::Caret) {
        return Ok(base);
    }

    tokens.advance();
    let exponent = parse_power(tokens)?;
    Ok(binary(base, BinaryOperator::Pow, exponent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn render(source: &str) -> String {
        let lexemes = tokenize(source);
        let mut tokens = TokenCursor::new(&lexemes);
        match parse_condition(&mut tokens) {
            Ok(expr) => expr.to_string(),
            Err(e) => panic!("failed to parse {source:?}: {e}"),
        }
    }

    #[test]
    fn precedence_climbs_from_comparison_to_power() {
        assert_eq!(render("1+2*3^2"), "(1.0+(2.0*(3.0^2.0)))");
        assert_eq!(render("a*b+c<d"), "(((a*b)+c)<d)");
    }

    #[test]
    fn additive_and_multiplicative_associate_left() {
        assert_eq!(render("8-4-2"), "((8.0-4.0)-2.0)");
        assert_eq!(render("8/4/2"), "((8.0/4.0)/2.0)");
    }

    #[test]
    fn power_associates_right() {
        assert_eq!(render("2^3^2"), "(2.0^(3.0^2.0))");
    }

    #[test]
    fn comparisons_do_not_chain() {
        let lexemes = tokenize("1 < 2 < 3");
        let mut tokens = TokenCursor::new(&lexemes);
        let expr = parse_condition(&mut tokens).unwrap();

        assert_eq!(expr.to_string(), "(1.0<2.0)");
        assert!(tokens.check(&Token::Less));
    }

    #[test]
    fn greater_than_renders_its_own_symbol() {
        assert_eq!(render("x > 1"), "(x>1.0)");
        assert_eq!(render("x = 1"), "(x=1.0)");
    }
}
