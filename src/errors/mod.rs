//! Error types and error reporting for the front end.
//!
//! This module defines the two error families the front end can produce:
//!
//! - Lexical errors detected while scanning source text
//! - Syntax errors detected while parsing the token stream
//!
//! Both are reported through the [`ErrorSink`] collaborator rather than
//! returned from `tokenize`/`parse`, so a single pass surfaces every
//! problem it finds.
//!
//! [`ErrorSink`]: errors::ErrorSink

pub mod errors;
