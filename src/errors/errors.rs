use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

/// Errors detected while scanning source text.
///
/// None of these abort the scan; the scanner reports them and keeps going
/// so every lexical problem surfaces in one pass.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexicalError {
    #[error("Unexpected character.")]
    UnexpectedCharacter,
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Invalid number literal: {lexeme:?}.")]
    MalformedNumber { lexeme: String },
}

/// Errors detected while parsing the token stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Expect variable name.")]
    ExpectVariableName,
    #[error("Expect ';' after variable declaration.")]
    ExpectSemicolonAfterDeclaration,
    #[error("Expect ';' after value.")]
    ExpectSemicolonAfterValue,
    #[error("Expect ';' after expression.")]
    ExpectSemicolonAfterExpression,
    #[error("Expect '}}' after block.")]
    ExpectRightBraceAfterBlock,
    #[error("Expect ')' after expression.")]
    ExpectRightParenAfterExpression,
    #[error("Expect ':' in ternary expression.")]
    ExpectColonInTernary,
    #[error("Invalid assignment target.")]
    InvalidAssignmentTarget,
    #[error("Missing the left hand operand.")]
    MissingLeftHandOperand,
    #[error("Expect expression.")]
    ExpectExpression,
}

/// Where the scanner and parser deliver their errors.
///
/// The front end never decides what to do about an error; it hands each one
/// to the sink and carries on. A sink instance belongs to a single
/// scan/parse call, so implementations only need to be safe for sequential
/// appends.
pub trait ErrorSink {
    fn lexical_error(&mut self, line: usize, error: LexicalError);
    fn syntax_error(&mut self, token: &Token, error: SyntaxError);
}

/// Position context attached to a reported error.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorLocation {
    /// Lexical errors carry only their line.
    Line,
    /// Syntax error detected at end of input.
    End,
    /// Syntax error detected at a concrete token, identified by lexeme.
    Token(String),
}

/// One reported error, located and rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub location: ErrorLocation,
    pub message: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            ErrorLocation::Line => write!(f, "[line {}] Error: {}", self.line, self.message),
            ErrorLocation::End => write!(f, "[line {}] Error at end: {}", self.line, self.message),
            ErrorLocation::Token(lexeme) => {
                write!(f, "[line {}] Error at '{}': {}", self.line, lexeme, self.message)
            }
        }
    }
}

/// Collecting [`ErrorSink`] used by the driver and the tests.
///
/// Append-only: diagnostics accumulate in reporting order and the had-error
/// state never resets within one front-end run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics::default()
    }

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn reports(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl ErrorSink for Diagnostics {
    fn lexical_error(&mut self, line: usize, error: LexicalError) {
        self.diagnostics.push(Diagnostic {
            line,
            location: ErrorLocation::Line,
            message: error.to_string(),
        });
    }

    fn syntax_error(&mut self, token: &Token, error: SyntaxError) {
        let location = if token.kind == TokenKind::Eof {
            ErrorLocation::End
        } else {
            ErrorLocation::Token(token.lexeme.clone())
        };
        self.diagnostics.push(Diagnostic {
            line: token.line,
            location,
            message: error.to_string(),
        });
    }
}
