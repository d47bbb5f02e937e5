//! Parser state and entry point.
//!
//! The parser is plain recursive descent: one function per grammar level,
//! spread over the `stmt` and `expr` submodules. This module owns the
//! token cursor, the consume/match helpers those functions share, and the
//! panic-mode synchronization used to recover from syntax errors.

use thiserror::Error;

use crate::{
    ast::statements::Stmt,
    errors::errors::{ErrorSink, SyntaxError},
    lexer::tokens::{Token, TokenKind},
};

use super::stmt::parse_declaration;

/// Internal unwind signal for syntax errors.
///
/// Raising a `ParseError` jumps from deep inside expression parsing back
/// to the declaration loop, which synchronizes and moves on. The error
/// itself carries no payload: reporting already happened at the raise
/// site, through the sink. It never leaves [`parse`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("parse error")]
pub(crate) struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// Token cursor shared by the recursive-descent functions.
pub(crate) struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    sink: &'a mut dyn ErrorSink,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<Token>, sink: &'a mut dyn ErrorSink) -> Parser<'a> {
        Parser {
            tokens,
            pos: 0,
            sink,
        }
    }

    pub(crate) fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub(crate) fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// The most recently consumed token.
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.pos - 1]
    }

    /// Advances past the current token, never past `Eof`.
    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_token_kind() == kind
    }

    /// Consumes the current token if its kind is one of `kinds`.
    pub(crate) fn matches(&mut self, kinds: &[TokenKind]) -> bool {
        for kind in kinds {
            if self.check(*kind) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// Expects the current token to be of `kind`; reports `error` and
    /// raises the recovery signal otherwise.
    pub(crate) fn consume(&mut self, kind: TokenKind, error: SyntaxError) -> ParseResult<Token> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        Err(self.error_at_current(error))
    }

    /// Reports a syntax error without raising; parsing continues.
    pub(crate) fn report(&mut self, token: &Token, error: SyntaxError) {
        self.sink.syntax_error(token, error);
    }

    pub(crate) fn error_at(&mut self, token: &Token, error: SyntaxError) -> ParseError {
        self.report(token, error);
        ParseError
    }

    pub(crate) fn error_at_current(&mut self, error: SyntaxError) -> ParseError {
        let token = self.current_token().clone();
        self.error_at(&token, error)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::Eof
    }

    /// Panic-mode recovery: discard tokens until just past a `;` or just
    /// before a statement-starting keyword. Always consumes the offending
    /// token first, so recovery makes progress on every malformed
    /// declaration.
    pub(crate) fn synchronize(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }
            match self.current_token_kind() {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {}
            }
            self.advance();
        }
    }
}

/// Parses a token stream into a sequence of statements.
///
/// Total over any `Eof`-terminated stream: syntax errors are reported to
/// `sink` and the malformed declaration is dropped, so the returned
/// program may hold fewer statements than the source had declarations.
pub fn parse(tokens: Vec<Token>, sink: &mut dyn ErrorSink) -> Vec<Stmt> {
    let mut parser = Parser::new(tokens, sink);

    let mut statements = vec![];
    while !parser.is_at_end() {
        if let Some(statement) = parse_declaration(&mut parser) {
            statements.push(statement);
        }
    }
    statements
}
