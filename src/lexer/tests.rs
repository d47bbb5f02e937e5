//! Unit tests for the lexer module.
//!
//! Covers tokenization of keywords, identifiers, literals, operators and
//! punctuation, comment and whitespace handling, line counting, and the
//! non-fatal lexical error paths.

use crate::errors::errors::Diagnostics;

use super::{
    lexer::tokenize,
    tokens::{Literal, TokenKind},
};

fn tokenize_clean(source: &str) -> Vec<super::tokens::Token> {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize(source, &mut diagnostics);
    assert!(
        !diagnostics.had_error(),
        "expected a clean scan, got {:?}",
        diagnostics.reports()
    );
    tokens
}

#[test]
fn test_tokenize_keywords() {
    let source = "and class else false for fun if nil or print return super this true var while";
    let tokens = tokenize_clean(source);

    assert_eq!(tokens[0].kind, TokenKind::And);
    assert_eq!(tokens[1].kind, TokenKind::Class);
    assert_eq!(tokens[2].kind, TokenKind::Else);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::For);
    assert_eq!(tokens[5].kind, TokenKind::Fun);
    assert_eq!(tokens[6].kind, TokenKind::If);
    assert_eq!(tokens[7].kind, TokenKind::Nil);
    assert_eq!(tokens[8].kind, TokenKind::Or);
    assert_eq!(tokens[9].kind, TokenKind::Print);
    assert_eq!(tokens[10].kind, TokenKind::Return);
    assert_eq!(tokens[11].kind, TokenKind::Super);
    assert_eq!(tokens[12].kind, TokenKind::This);
    assert_eq!(tokens[13].kind, TokenKind::True);
    assert_eq!(tokens[14].kind, TokenKind::Var);
    assert_eq!(tokens[15].kind, TokenKind::While);
    assert_eq!(tokens[16].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_123 _underscore CamelCase printer";
    let tokens = tokenize_clean(source);

    for token in &tokens[..4] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].lexeme, "foo");
    assert_eq!(tokens[1].lexeme, "bar_123");
    assert_eq!(tokens[2].lexeme, "_underscore");
    assert_eq!(tokens[3].lexeme, "CamelCase");
    // A keyword prefix does not make an identifier a keyword.
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].lexeme, "printer");
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5";
    let tokens = tokenize_clean(source);

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].literal, Some(Literal::Number(3.14)));
    assert_eq!(tokens[2].literal, Some(Literal::Number(0.0)));
    assert_eq!(tokens[3].literal, Some(Literal::Number(100.5)));
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_number_trailing_dot() {
    // The dot is only part of the number when a digit follows it.
    let tokens = tokenize_clean("123.");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "123");
    assert_eq!(tokens[1].kind, TokenKind::Dot);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize_clean(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Literal::String("hello".to_string())));
    assert_eq!(tokens[0].lexeme, r#""hello""#);
    assert_eq!(
        tokens[1].literal,
        Some(Literal::String("multiple words".to_string()))
    );
    assert_eq!(tokens[2].literal, Some(Literal::String(String::new())));
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_multiline_string() {
    let tokens = tokenize_clean("\"a\nb\"");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].literal, Some(Literal::String("a\nb".to_string())));
    // The embedded newline advanced the line counter.
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_tokenize_unterminated_string() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("\"abc", &mut diagnostics);

    assert_eq!(diagnostics.reports().len(), 1);
    assert_eq!(diagnostics.reports()[0].message, "Unterminated string.");
    // No String token comes out of the bad run, only the Eof marker.
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_maximal_munch() {
    let tokens = tokenize_clean("== = != ! <= < >= >");

    assert_eq!(tokens[0].kind, TokenKind::EqualEqual);
    assert_eq!(tokens[1].kind, TokenKind::Equal);
    assert_eq!(tokens[2].kind, TokenKind::BangEqual);
    assert_eq!(tokens[3].kind, TokenKind::Bang);
    assert_eq!(tokens[4].kind, TokenKind::LessEqual);
    assert_eq!(tokens[5].kind, TokenKind::Less);
    assert_eq!(tokens[6].kind, TokenKind::GreaterEqual);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_adjacent_equals() {
    // `==` is one token, never two `=`.
    let tokens = tokenize_clean("a==b");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[1].kind, TokenKind::EqualEqual);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize_clean("( ) { } , . - + ; * / ? :");

    let expected = [
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Minus,
        TokenKind::Plus,
        TokenKind::Semicolon,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::Eof,
    ];
    for (token, kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
    }
}

#[test]
fn test_tokenize_line_comment() {
    let tokens = tokenize_clean("var x = 5; // this is a comment\nvar y = 10;");

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    // The comment vanishes; the next token is on line 2.
    assert_eq!(tokens[5].kind, TokenKind::Var);
    assert_eq!(tokens[5].line, 2);
}

#[test]
fn test_tokenize_block_comment() {
    let tokens = tokenize_clean("1 /* comment * with stars */ 2");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_block_comment_counts_lines() {
    let tokens = tokenize_clean("/* one\ntwo\nthree */ x");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].line, 3);
}

#[test]
fn test_tokenize_unclosed_block_comment() {
    // Runs to end of input without looping or emitting tokens.
    let tokens = tokenize_clean("/* never closed");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_slash_token() {
    let tokens = tokenize_clean("1 / 2");

    assert_eq!(tokens[1].kind, TokenKind::Slash);
}

#[test]
fn test_tokenize_unexpected_character() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("@ 1", &mut diagnostics);

    assert_eq!(diagnostics.reports().len(), 1);
    assert_eq!(diagnostics.reports()[0].message, "Unexpected character.");
    // The scan keeps going past the bad character.
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_non_ascii_character() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("var é = 1;", &mut diagnostics);

    // One error for the whole multi-byte character, not one per byte.
    assert_eq!(diagnostics.reports().len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Equal);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize_clean("");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].lexeme, "");
    assert_eq!(tokens[0].line, 1);
}

#[test]
fn test_tokenize_always_ends_with_eof() {
    for source in ["", "1 + 2", "\"open", "@#@#", "var x = 1;\n"] {
        let mut diagnostics = Diagnostics::new();
        let tokens = tokenize(source, &mut diagnostics);
        let last = tokens.last().expect("token stream is never empty");
        assert_eq!(last.kind, TokenKind::Eof);
        assert_eq!(last.lexeme, "");
    }
}

#[test]
fn test_tokenize_tracks_lines() {
    let tokens = tokenize_clean("1\n2\n\n3");

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 4);
}

#[test]
fn test_reclassifying_lexemes_is_deterministic() {
    // Scanning any token's lexeme again reproduces its kind.
    let source = "var answer = (1.5 + 2) * iter; print \"done\"; // tail";
    let tokens = tokenize_clean(source);

    for token in &tokens {
        let mut diagnostics = Diagnostics::new();
        let rescanned = tokenize(&token.lexeme, &mut diagnostics);
        assert_eq!(rescanned.last().map(|last| last.kind), Some(TokenKind::Eof));
        if token.kind == TokenKind::Eof {
            continue;
        }
        assert_eq!(rescanned[0].kind, token.kind, "lexeme {:?}", token.lexeme);
    }
}
