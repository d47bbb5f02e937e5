use crate::{
    ast::statements::Stmt,
    errors::errors::SyntaxError,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expression,
    parser::{ParseResult, Parser},
};

/// Parses one top-level declaration, recovering on failure.
///
/// This is the recovery boundary: a syntax error anywhere below lands
/// here, the parser synchronizes to the next statement, and the malformed
/// declaration yields `None`.
pub(crate) fn parse_declaration(parser: &mut Parser) -> Option<Stmt> {
    let result = if parser.matches(&[TokenKind::Var]) {
        parse_var_decl_stmt(parser)
    } else {
        parse_stmt(parser)
    };

    match result {
        Ok(statement) => Some(statement),
        Err(_) => {
            parser.synchronize();
            None
        }
    }
}

pub(crate) fn parse_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    if parser.matches(&[TokenKind::Print]) {
        return parse_print_stmt(parser);
    }
    if parser.matches(&[TokenKind::LeftBrace]) {
        return Ok(Stmt::Block(parse_block_stmt(parser)?));
    }
    parse_expression_stmt(parser)
}

fn parse_var_decl_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let name = parser.consume(TokenKind::Identifier, SyntaxError::ExpectVariableName)?;

    let initializer = if parser.matches(&[TokenKind::Equal]) {
        Some(parse_expression(parser)?)
    } else {
        None
    };

    parser.consume(
        TokenKind::Semicolon,
        SyntaxError::ExpectSemicolonAfterDeclaration,
    )?;
    Ok(Stmt::Var { name, initializer })
}

fn parse_print_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let value = parse_expression(parser)?;
    parser.consume(TokenKind::Semicolon, SyntaxError::ExpectSemicolonAfterValue)?;
    Ok(Stmt::Print(value))
}

/// Statements between `{` and `}`. A malformed statement inside the block
/// is recovered at the declaration level, so the remaining statements are
/// still attempted.
fn parse_block_stmt(parser: &mut Parser) -> ParseResult<Vec<Stmt>> {
    let mut statements = vec![];

    while !parser.check(TokenKind::RightBrace) && !parser.is_at_end() {
        if let Some(statement) = parse_declaration(parser) {
            statements.push(statement);
        }
    }

    parser.consume(
        TokenKind::RightBrace,
        SyntaxError::ExpectRightBraceAfterBlock,
    )?;
    Ok(statements)
}

fn parse_expression_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let expression = parse_expression(parser)?;
    parser.consume(
        TokenKind::Semicolon,
        SyntaxError::ExpectSemicolonAfterExpression,
    )?;
    Ok(Stmt::Expression(expression))
}
