use crate::errors::errors::{ErrorSink, LexicalError};

use super::tokens::{Literal, Token, TokenKind, KEYWORDS};

/// Scanning state: a single forward cursor over the source bytes.
///
/// `start` marks the first byte of the token being scanned, `current` the
/// next byte to consume. `line` counts newlines seen so far, including
/// those inside block comments and multi-line strings.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    fn scan_token(&mut self, sink: &mut dyn ErrorSink) {
        let byte = self.advance();
        match byte {
            b'(' => self.add_token(TokenKind::LeftParen),
            b')' => self.add_token(TokenKind::RightParen),
            b'{' => self.add_token(TokenKind::LeftBrace),
            b'}' => self.add_token(TokenKind::RightBrace),
            b',' => self.add_token(TokenKind::Comma),
            b'.' => self.add_token(TokenKind::Dot),
            b'-' => self.add_token(TokenKind::Minus),
            b'+' => self.add_token(TokenKind::Plus),
            b';' => self.add_token(TokenKind::Semicolon),
            b'*' => self.add_token(TokenKind::Star),
            b'?' => self.add_token(TokenKind::Question),
            b':' => self.add_token(TokenKind::Colon),
            b'!' => {
                let kind = if self.matches(b'=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            b'=' => {
                let kind = if self.matches(b'=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            b'>' => {
                let kind = if self.matches(b'=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            b'<' => {
                let kind = if self.matches(b'=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            b'/' => {
                if self.matches(b'/') {
                    self.line_comment();
                } else if self.matches(b'*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            b' ' | b'\r' | b'\t' => {}
            b'\n' => self.line += 1,
            b'"' => self.string(sink),
            _ => {
                if byte.is_ascii_digit() {
                    self.number(sink);
                } else if is_identifier_start(byte) {
                    self.identifier();
                } else {
                    // Skip the rest of a multi-byte UTF-8 sequence so one
                    // bad character reports exactly once.
                    while is_utf8_continuation(self.peek()) {
                        self.current += 1;
                    }
                    sink.lexical_error(self.line, LexicalError::UnexpectedCharacter);
                }
            }
        }
    }

    /// A line comment runs to the end of the line; the newline itself is
    /// left for the main loop so the line counter stays in one place.
    fn line_comment(&mut self) {
        while self.peek() != b'\n' && !self.is_at_end() {
            self.current += 1;
        }
    }

    /// Block comments do not nest. The closing `*/` must be adjacent; a
    /// lone `*` inside the comment is consumed like any other byte.
    fn block_comment(&mut self) {
        while !(self.peek() == b'*' && self.peek_next() == b'/') && !self.is_at_end() {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.current += 1;
        }
        if !self.is_at_end() {
            self.current += 2;
        }
    }

    fn string(&mut self, sink: &mut dyn ErrorSink) {
        while self.peek() != b'"' && !self.is_at_end() {
            if self.peek() == b'\n' {
                self.line += 1;
            }
            self.current += 1;
        }
        if self.is_at_end() {
            sink.lexical_error(self.line, LexicalError::UnterminatedString);
            return;
        }
        // The closing quote.
        self.current += 1;
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_literal_token(TokenKind::String, Literal::String(value));
    }

    fn number(&mut self, sink: &mut dyn ErrorSink) {
        while self.peek().is_ascii_digit() {
            self.current += 1;
        }
        // A fractional part needs at least one digit after the dot, so a
        // trailing `.` is left to scan as its own token.
        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.current += 1;
            while self.peek().is_ascii_digit() {
                self.current += 1;
            }
        }
        match self.lexeme().parse::<f64>() {
            Ok(value) => self.add_literal_token(TokenKind::Number, Literal::Number(value)),
            Err(_) => sink.lexical_error(
                self.line,
                LexicalError::MalformedNumber {
                    lexeme: self.lexeme().to_string(),
                },
            ),
        }
    }

    fn identifier(&mut self) {
        while is_identifier_continue(self.peek()) {
            self.current += 1;
        }
        let kind = match KEYWORDS.get(self.lexeme()) {
            Some(kind) => *kind,
            None => TokenKind::Identifier,
        };
        self.add_token(kind);
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal: None,
            line: self.line,
        });
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        self.tokens.push(Token {
            kind,
            lexeme: self.lexeme().to_string(),
            literal: Some(literal),
            line: self.line,
        });
    }

    fn advance(&mut self) -> u8 {
        let byte = self.source.as_bytes()[self.current];
        self.current += 1;
        byte
    }

    /// Consume the next byte only if it matches.
    fn matches(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.source.as_bytes()[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> u8 {
        if self.is_at_end() {
            return b'\0';
        }
        self.source.as_bytes()[self.current]
    }

    fn peek_next(&self) -> u8 {
        if self.current + 1 >= self.source.len() {
            return b'\0';
        }
        self.source.as_bytes()[self.current + 1]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

fn is_identifier_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_identifier_continue(byte: u8) -> bool {
    is_identifier_start(byte) || byte.is_ascii_digit()
}

fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Scans the whole source and returns its tokens, always terminated by one
/// `Eof` token. Lexical errors go to `sink`; the scan never stops early.
pub fn tokenize(source: &str, sink: &mut dyn ErrorSink) -> Vec<Token> {
    let mut lexer = Lexer::new(source);

    while !lexer.is_at_end() {
        lexer.start = lexer.current;
        lexer.scan_token(sink);
    }

    lexer.tokens.push(Token {
        kind: TokenKind::Eof,
        lexeme: String::new(),
        literal: None,
        line: lexer.line,
    });
    lexer.tokens
}
