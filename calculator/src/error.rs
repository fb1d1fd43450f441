use calc_lexers::{LexError, Operator};
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum ExpressionError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("braces are not matching: missing opening brace")]
    MissingOpenBrace,

    #[error("braces are not matching: missing closing brace")]
    MissingCloseBrace,

    #[error("division by zero in '{0}'")]
    DivisionByZero(Operator),

    #[error("invalid number of operands for '{op}': got {count}")]
    WrongNumberOfOperands { op: Operator, count: usize },

    #[error("invalid number of operands: {0} values left unused")]
    LeftoverOperands(usize),

    #[error("operator '{0}' can't be evaluated")]
    UnsupportedOperator(Operator),

    #[error("unknown function '{0}'")]
    UnsupportedFunction(String),
}

impl ExpressionError {
    /// Char offset into the input, when the failure can be pinned to one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ExpressionError::Lex(e) => e.offset(),
            _ => None,
        }
    }
}
