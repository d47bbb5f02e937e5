use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::expressions::Expr;

/// Statement node. Like [`Expr`], a closed set of variants with exclusive
/// ownership of children. A `Block` only groups statements; any scoping
/// semantics belong to the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    Block(Vec<Stmt>),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(expr) => write!(f, "{};", expr),
            Stmt::Print(expr) => write!(f, "print {};", expr),
            Stmt::Var {
                name,
                initializer: Some(expr),
            } => write!(f, "var {} = {};", name.lexeme, expr),
            Stmt::Var {
                name,
                initializer: None,
            } => write!(f, "var {};", name.lexeme),
            Stmt::Block(statements) => {
                write!(f, "{{")?;
                for statement in statements {
                    write!(f, " {}", statement)?;
                }
                write!(f, " }}")
            }
        }
    }
}
