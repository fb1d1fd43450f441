use calc_lexers::{parse_tokens, Operator, Separators, Token};
use crate::error::ExpressionError;
use std::ops::Deref;

#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<Token>);

impl Deref for RPNExpr {
    type Target = [Token];
    fn deref(&self) -> &[Token] { &self.0 }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str, separators: Separators) -> Result<RPNExpr, ExpressionError> {
        Self::parse(parse_tokens(expr, separators)?)
    }

    // Operators of equal precedence pop each other (>=), so everything
    // associates to the left: 2^3^2 is (2^3)^2.
    pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<RPNExpr, ExpressionError> {
        let mut out = Vec::new();
        let mut stack = Vec::<Operator>::new();

        for token in tokens {
            let op = match token {
                Token::Operand(_) | Token::Function(_) => {
                    out.push(token);
                    continue;
                }
                Token::Operator(op) => op,
            };
            let mut matched_brace = false;
            while let Some(&top) = stack.last() {
                if top == Operator::OpenBrace {
                    if op == Operator::CloseBrace {
                        stack.pop(); // peel matching OpenBrace
                        matched_brace = true;
                    }
                    break;
                } else if top.precedence() >= op.precedence() {
                    stack.pop();
                    out.push(Token::Operator(top));
                } else {
                    break;
                }
            }
            if op != Operator::CloseBrace {
                stack.push(op);
            } else if !matched_brace {
                return Err(ExpressionError::MissingOpenBrace);
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                Operator::OpenBrace => return Err(ExpressionError::MissingCloseBrace),
                op => out.push(Token::Operator(op)),
            }
        }
        Ok(RPNExpr(out))
    }
}

pub fn convert_infix_to_rpn(tokens: Vec<Token>) -> Result<RPNExpr, ExpressionError> {
    ShuntingParser::parse(tokens)
}
