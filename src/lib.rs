//! Front end for a small expression/statement language.
//!
//! Source text is scanned into a stream of tokens, then parsed into an
//! abstract syntax tree by recursive descent with an explicit operator
//! precedence ladder. Both passes report problems through an error sink
//! and always run to completion; malformed input yields diagnostics and a
//! partial result, never a panic.

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
