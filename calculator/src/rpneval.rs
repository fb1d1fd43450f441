use calc_lexers::{Operator, Token};
use crate::error::ExpressionError;

/// Apply `op` to its operands, given in left-to-right order.
pub fn calculate(op: Operator, operands: &[f64]) -> Result<f64, ExpressionError> {
    use Operator::*;
    match (op, operands) {
        (OpenBrace | CloseBrace, _) => Err(ExpressionError::UnsupportedOperator(op)),
        (Plus, &[a]) => Ok(a),
        (Plus, &[a, b]) => Ok(a + b),
        (Minus, &[a]) => Ok(-a),
        (Minus, &[a, b]) => Ok(a - b),
        (Multiply, &[a, b]) => Ok(a * b),
        (Divide, &[a, b]) => {
            if b == 0.0 { return Err(ExpressionError::DivisionByZero(op)); }
            Ok(a / b)
        }
        // floor both sides, then divide as integers truncating toward zero
        (IntegerDivision, &[a, b]) => {
            let (a, b) = (a.floor() as i64, b.floor() as i64);
            if b == 0 { return Err(ExpressionError::DivisionByZero(op)); }
            Ok(a.wrapping_div(b) as f64)
        }
        (Modulus, &[a, b]) => {
            if b == 0.0 { return Err(ExpressionError::DivisionByZero(op)); }
            Ok(a % b)
        }
        (Power, &[a, b]) => Ok(a.powf(b)),
        _ => Err(ExpressionError::WrongNumberOfOperands { op, count: operands.len() }),
    }
}

/// Run an RPN sequence on a value stack. An empty sequence yields 0.
pub fn evaluate_rpn(rpn: &[Token]) -> Result<f64, ExpressionError> {
    let mut operands = Vec::<f64>::new();

    for token in rpn.iter() {
        match token {
            Token::Operand(value) => operands.push(*value),
            Token::Operator(op) => {
                let count = op.parameter_count().min(operands.len());
                if count < op.minimal_parameter_count() {
                    return Err(ExpressionError::WrongNumberOfOperands { op: *op, count });
                }
                let args = operands.split_off(operands.len() - count);
                operands.push(calculate(*op, &args)?);
            }
            Token::Function(name) => {
                return Err(ExpressionError::UnsupportedFunction(name.clone()));
            }
        }
    }
    match operands.as_slice() {
        [] => Ok(0.0),
        [result] => Ok(*result),
        leftover => Err(ExpressionError::LeftoverOperands(leftover.len())),
    }
}
