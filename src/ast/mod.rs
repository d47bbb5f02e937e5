/// AST (Abstract Syntax Tree) module
/// Contains the node definitions the parser produces
///
/// Submodules:
/// - expressions: the closed set of expression variants
/// - statements: the closed set of statement variants
pub mod expressions;
pub mod statements;
