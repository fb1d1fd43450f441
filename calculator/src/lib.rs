//! Evaluates arithmetic typed into entry fields, e.g. `3*12.5` in a
//! quantity box, through tokenizer -> shunting-yard -> RPN evaluation.

pub use calc_lexers::{parse_tokens, LexError, Operator, Separators, Token};

pub use error::ExpressionError;
pub use parser::{convert_infix_to_rpn, RPNExpr, ShuntingParser};
pub use rpneval::{calculate, evaluate_rpn};

mod error;
pub mod parser;

mod rpnprint;
mod rpneval;

/// Evaluation pipeline bound to a separator pair. Holds no other state, so a
/// single instance can be shared across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Calculator {
    separators: Separators,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separators(separators: Separators) -> Self {
        Calculator { separators }
    }

    pub fn separators(&self) -> Separators {
        self.separators
    }

    pub fn parse(&self, input: &str) -> Result<RPNExpr, ExpressionError> {
        let tokens = parse_tokens(input, self.separators)?;
        log::debug!("tokens: {:?}", tokens);
        let rpn = convert_infix_to_rpn(tokens)?;
        log::debug!("rpn: {:?}", rpn.0);
        Ok(rpn)
    }

    pub fn evaluate(&self, input: &str) -> Result<f64, ExpressionError> {
        let result = evaluate_rpn(&self.parse(input)?);
        log::debug!("{:?} evaluated to {:?}", input, result);
        result
    }
}

/// Evaluate `input` with `.` as decimal point and `,` grouping digits.
pub fn evaluate(input: &str) -> Result<f64, ExpressionError> {
    Calculator::new().evaluate(input)
}
