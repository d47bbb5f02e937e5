//! Lexical analysis for the front end.
//!
//! This module contains the scanner that converts source text into a
//! stream of tokens for parsing. It handles:
//!
//! - Maximal-munch tokenization with a single forward cursor
//! - Keywords, identifiers, number and string literals
//! - Line and block comments, with line counting for diagnostics
//! - Lexical errors, reported without aborting the scan

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
