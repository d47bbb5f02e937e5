//! The expression precedence ladder, loosest binding first:
//! assignment, comma, ternary, equality, comparison, term, factor, unary,
//! primary. Each level parses the next-tighter level for its operands and
//! loops while its own operators are in front, which makes every binary
//! level left-associative. Assignment and ternary recurse into themselves
//! on the right instead, making them right-associative.

use crate::{
    ast::expressions::{Expr, LiteralValue},
    errors::errors::SyntaxError,
    lexer::tokens::{Literal, TokenKind},
};

use super::parser::{ParseResult, Parser};

pub(crate) fn parse_expression(parser: &mut Parser) -> ParseResult<Expr> {
    parse_assignment_expr(parser)
}

/// `IDENTIFIER "=" assignment | comma`. The left side is parsed first as
/// an ordinary expression; only a bare variable reference is a valid
/// assignment target. Anything else followed by `=` is reported but not
/// raised: the expression that was already built is returned so the rest
/// of the statement still parses.
fn parse_assignment_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let expr = parse_comma_expr(parser)?;

    if parser.matches(&[TokenKind::Equal]) {
        let equals = parser.previous().clone();
        let value = parse_assignment_expr(parser)?;

        return match expr {
            Expr::Variable { name } => Ok(Expr::Assign {
                name,
                value: Box::new(value),
            }),
            other => {
                parser.report(&equals, SyntaxError::InvalidAssignmentTarget);
                Ok(other)
            }
        };
    }

    Ok(expr)
}

/// The comma operator builds a plain `Binary` node whose operator token
/// carries `,`; the evaluator decides what sequencing means.
fn parse_comma_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_ternary_expr(parser)?;

    while parser.matches(&[TokenKind::Comma]) {
        let operator = parser.previous().clone();
        let right = parse_ternary_expr(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

/// `cond ? a : b`, desugared as a binary-of-binary:
/// `Binary(cond, '?', Binary(a, ':', b))`. Both branches recurse into the
/// ternary level itself, so the operator associates to the right.
fn parse_ternary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_equality_expr(parser)?;

    while parser.matches(&[TokenKind::Question]) {
        let question = parser.previous().clone();
        let then_branch = parse_ternary_expr(parser)?;
        let colon = parser.consume(TokenKind::Colon, SyntaxError::ExpectColonInTernary)?;
        let else_branch = parse_ternary_expr(parser)?;

        expr = Expr::Binary {
            left: Box::new(expr),
            operator: question,
            right: Box::new(Expr::Binary {
                left: Box::new(then_branch),
                operator: colon,
                right: Box::new(else_branch),
            }),
        };
    }

    Ok(expr)
}

fn parse_equality_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_comparison_expr(parser)?;

    while parser.matches(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
        let operator = parser.previous().clone();
        let right = parse_comparison_expr(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

fn parse_comparison_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_term_expr(parser)?;

    while parser.matches(&[
        TokenKind::Greater,
        TokenKind::GreaterEqual,
        TokenKind::Less,
        TokenKind::LessEqual,
    ]) {
        let operator = parser.previous().clone();
        let right = parse_term_expr(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

fn parse_term_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_factor_expr(parser)?;

    while parser.matches(&[TokenKind::Minus, TokenKind::Plus]) {
        let operator = parser.previous().clone();
        let right = parse_factor_expr(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

fn parse_factor_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let mut expr = parse_unary_expr(parser)?;

    while parser.matches(&[TokenKind::Slash, TokenKind::Star]) {
        let operator = parser.previous().clone();
        let right = parse_unary_expr(parser)?;
        expr = Expr::Binary {
            left: Box::new(expr),
            operator,
            right: Box::new(right),
        };
    }

    Ok(expr)
}

fn parse_unary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    if parser.matches(&[TokenKind::Bang, TokenKind::Minus]) {
        let operator = parser.previous().clone();
        let operand = parse_unary_expr(parser)?;
        return Ok(Expr::Unary {
            operator,
            operand: Box::new(operand),
        });
    }
    parse_primary_expr(parser)
}

/// The ladder's floor: always either consumes a token or raises, so no
/// rule above can recurse without progress.
fn parse_primary_expr(parser: &mut Parser) -> ParseResult<Expr> {
    match parser.current_token_kind() {
        TokenKind::False => {
            parser.advance();
            Ok(Expr::Literal(LiteralValue::Bool(false)))
        }
        TokenKind::True => {
            parser.advance();
            Ok(Expr::Literal(LiteralValue::Bool(true)))
        }
        TokenKind::Nil => {
            parser.advance();
            Ok(Expr::Literal(LiteralValue::Nil))
        }
        TokenKind::Number | TokenKind::String => {
            let token = parser.advance().clone();
            match token.literal.clone() {
                Some(Literal::Number(value)) => Ok(Expr::Literal(LiteralValue::Number(value))),
                Some(Literal::String(value)) => Ok(Expr::Literal(LiteralValue::String(value))),
                // A literal token without a decoded value cannot come out
                // of the lexer; treat it like any other bad token.
                None => Err(parser.error_at(&token, SyntaxError::ExpectExpression)),
            }
        }
        TokenKind::Identifier => {
            let name = parser.advance().clone();
            Ok(Expr::Variable { name })
        }
        TokenKind::LeftParen => {
            parser.advance();
            let expr = parse_expression(parser)?;
            parser.consume(
                TokenKind::RightParen,
                SyntaxError::ExpectRightParenAfterExpression,
            )?;
            Ok(Expr::Grouping(Box::new(expr)))
        }
        // A binary or comparison operator with nothing in front of it gets
        // a more pointed message than the generic one below.
        TokenKind::Comma
        | TokenKind::Question
        | TokenKind::BangEqual
        | TokenKind::Equal
        | TokenKind::EqualEqual
        | TokenKind::Greater
        | TokenKind::GreaterEqual
        | TokenKind::Less
        | TokenKind::LessEqual
        | TokenKind::Plus
        | TokenKind::Star
        | TokenKind::Slash => {
            let operator = parser.advance().clone();
            Err(parser.error_at(&operator, SyntaxError::MissingLeftHandOperand))
        }
        _ => Err(parser.error_at_current(SyntaxError::ExpectExpression)),
    }
}
