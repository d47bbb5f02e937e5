//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. Parsing is recursive descent with one
//! function per grammar level and handles:
//!
//! - Declarations and statements (var, print, block, expression)
//! - Expressions through an explicit operator precedence ladder,
//!   including the ternary and comma extensions
//! - Syntax error reporting with panic-mode recovery at statement
//!   boundaries

pub mod parser;

pub(crate) mod expr;
pub(crate) mod stmt;
