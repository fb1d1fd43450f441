use thiserror::Error;

/// Failures while splitting an entry into tokens. Positions are char offsets.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum LexError {
    #[error("unable to parse character '{ch}' at position {pos}")]
    UnknownChar { ch: char, pos: usize },

    #[error("separator '{ch}' at position {pos} is not preceded by a digit")]
    StraySeparator { ch: char, pos: usize },

    #[error("'{lexeme}' at position {pos} is not a valid number")]
    BadNumber { lexeme: String, pos: usize },

    #[error("no tokens found")]
    NoTokens,
}

impl LexError {
    pub fn offset(&self) -> Option<usize> {
        match *self {
            LexError::UnknownChar { pos, .. }
            | LexError::StraySeparator { pos, .. }
            | LexError::BadNumber { pos, .. } => Some(pos),
            LexError::NoTokens => None,
        }
    }
}
