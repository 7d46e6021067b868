use std::rc::Rc;

use crate::{
    ast::{ProcedureDef, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_condition,
            core::ParseResult,
            utils::{TokenCursor, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a sequence of statements separated by `;`.
///
/// The statements fold to the left: `a; b; c` becomes
/// `Sequence(Sequence(a, b), c)`, which still runs `a`, `b`, `c` in order.
///
/// Grammar: `program := statement (";" statement)*`
pub fn parse_program(tokens: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    let mut program = parse_statement(tokens)?;
    while tokens.check(&Token::Semicolon) {
        tokens.advance();
        let next = parse_statement(tokens)?;
        program = program.then(next);
    }
    Ok(program)
}

/// Parses a single statement.
///
/// A statement is selected by its first token:
/// - `proc` starts a procedure definition,
/// - `if` a two-armed conditional,
/// - `while` a loop,
/// - `print` a print statement,
/// - anything else is parsed as a condition used as a statement.
pub fn parse_statement(tokens: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    if tokens.check_word("proc") {
        return parse_procedure(tokens);
    }
    if tokens.check_word("if") {
        return parse_if(tokens);
    }
    if tokens.check_word("while") {
        return parse_while(tokens);
    }
    if tokens.check_word("print") {
        tokens.advance();
        let expr = parse_condition(tokens)?;
        return Ok(Statement::Print { expr });
    }

    let expr = parse_condition(tokens)?;
    Ok(Statement::Expression { expr })
}

/// Parses a procedure definition.
///
/// Grammar: `"proc" identifier "(" (identifier ("," identifier)*)? ")" block`
fn parse_procedure(tokens: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    tokens.expect_word("proc")?;
    let name = parse_identifier(tokens)?;
    tokens.expect(&Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let body = parse_block(tokens)?;

    Ok(Statement::Procedure(Rc::new(ProcedureDef { name, params, body })))
}

/// Parses a conditional. Both arms are required.
///
/// Grammar: `"if" condition block "else" block`
fn parse_if(tokens: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    tokens.expect_word("if")?;
    let condition = parse_condition(tokens)?;
    let then_branch = parse_block(tokens)?;
    tokens.expect_word("else")?;
    let else_branch = parse_block(tokens)?;

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch: Box::new(else_branch) })
}

/// Parses a loop.
///
/// Grammar: `"while" condition block`
fn parse_while(tokens: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    tokens.expect_word("while")?;
    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::While { condition,
                          body: Box::new(body) })
}

/// Parses a braced program.
///
/// Grammar: `block := "{" program "}"`
fn parse_block(tokens: &mut TokenCursor<'_>) -> ParseResult<Statement> {
    tokens.expect(&Token::LBrace)?;
    let body = parse_program(tokens)?;
    if !tokens.check(&Token::RBrace) {
        return Err(tokens.error("';' or '}'"));
    }
    tokens.advance();
    Ok(body)
}
