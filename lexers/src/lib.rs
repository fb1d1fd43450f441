mod scanner;
mod separators;
mod token;
mod error;
mod calc_tokenizer;

pub use scanner::Scanner;
pub use separators::Separators;
pub use token::{Operator, Token};
pub use error::LexError;
pub use calc_tokenizer::{parse_tokens, CalcTokenizer};

#[cfg(test)]
mod scanner_test;
#[cfg(test)]
mod calc_tokenizer_test;
