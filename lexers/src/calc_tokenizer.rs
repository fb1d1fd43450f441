#![deny(warnings)]

use crate::error::LexError;
use crate::scanner::Scanner;
use crate::separators::Separators;
use crate::token::{Operator, Token};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    None,
    Number,
    Function,
    Operator,
    Whitespace,
}

/// Single pass tokenizer for calculator entries.
///
/// Digits and separators are buffered into a number, letters into a function
/// name. A buffer is flushed as soon as a character of a different class
/// shows up, so `12ab+3` yields `12`, `ab`, `+`, `3`. Operators are emitted
/// immediately.
pub struct CalcTokenizer {
    separators: Separators,
    tokens: Vec<Token>,
    number: String,
    number_start: usize,
    function: String,
    state: State,
}

pub fn parse_tokens(input: &str, separators: Separators) -> Result<Vec<Token>, LexError> {
    CalcTokenizer::new(separators).tokenize(input)
}

impl CalcTokenizer {
    pub fn new(separators: Separators) -> Self {
        CalcTokenizer {
            separators,
            tokens: Vec::new(),
            number: String::new(),
            number_start: 0,
            function: String::new(),
            state: State::None,
        }
    }

    pub fn tokenize(mut self, input: &str) -> Result<Vec<Token>, LexError> {
        let mut src = Scanner::from_str(input);
        while let Some(c) = src.next() {
            let pos = src.offset().unwrap_or_default();
            let state = self.classify(c, pos)?;
            self.transition(state, pos)?;
            match state {
                State::Number => self.number.push(c),
                State::Function => self.function.push(c),
                State::Operator => {
                    if let Some(op) = Operator::from_char(c) {
                        self.tokens.push(Token::Operator(op));
                    }
                }
                State::Whitespace | State::None => (),
            }
        }
        self.transition(State::None, 0)?;

        if self.tokens.is_empty() {
            return Err(LexError::NoTokens);
        }
        log::trace!("tokenized {:?} into {:?}", input, self.tokens);
        Ok(self.tokens)
    }

    fn classify(&self, c: char, pos: usize) -> Result<State, LexError> {
        if c.is_ascii_digit() || (self.separators.is_separator(c) && !c.is_whitespace()) {
            Ok(State::Number)
        } else if c.is_whitespace() {
            // blanks only belong to a number when the locale groups with them
            if !self.number.is_empty() && self.separators.has_whitespace() {
                Ok(State::Number)
            } else {
                Ok(State::Whitespace)
            }
        } else if c == ',' || c == '.' {
            if self.number.is_empty() {
                Err(LexError::StraySeparator { ch: c, pos })
            } else {
                Ok(State::Number)
            }
        } else if c.is_alphabetic() {
            Ok(State::Function)
        } else if Operator::from_char(c).is_some() {
            Ok(State::Operator)
        } else {
            Err(LexError::UnknownChar { ch: c, pos })
        }
    }

    // flush whatever the previous state was buffering when the class changes
    fn transition(&mut self, state: State, pos: usize) -> Result<(), LexError> {
        if state == self.state {
            return Ok(());
        }
        match self.state {
            State::Number => self.flush_number()?,
            State::Function => {
                let name = std::mem::take(&mut self.function);
                self.tokens.push(Token::Function(name));
            }
            _ => (),
        }
        if state == State::Number {
            self.number_start = pos;
        }
        self.state = state;
        Ok(())
    }

    // A '+' or '-' that opens the entry or follows another operator is a
    // sign, it gets folded into the number. ')' ends an operand so a sign
    // after it stays binary.
    fn folds_sign(&self) -> Option<Operator> {
        let n = self.tokens.len();
        match self.tokens.last() {
            Some(Token::Operator(op)) if op.is_sign() => {
                let after_operator = n == 1 || matches!(
                    self.tokens[n - 2],
                    Token::Operator(prev) if prev != Operator::CloseBrace
                );
                if after_operator { Some(*op) } else { None }
            }
            _ => None,
        }
    }

    fn flush_number(&mut self) -> Result<(), LexError> {
        let mut lexeme = std::mem::take(&mut self.number);
        if let Some(sign) = self.folds_sign() {
            self.tokens.pop();
            if sign == Operator::Minus {
                lexeme.insert(0, '-');
            }
        }
        let normalized = self.separators.normalize(&lexeme);
        match normalized.parse::<f64>() {
            Ok(value) => {
                self.tokens.push(Token::Operand(value));
                Ok(())
            }
            Err(_) => Err(LexError::BadNumber { lexeme, pos: self.number_start }),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
