use crate::parser::RPNExpr;
use calc_lexers::{Operator, Token};
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a Token),
    Node(Operator, Vec<AST<'a>>),
}

impl RPNExpr {
    // Rebuild the expression tree with the same arity rules the evaluator
    // uses, None if the sequence doesn't reduce to a single tree.
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            match *token {
                Token::Operand(_) | Token::Function(_) => ops.push(AST::Leaf(token)),
                Token::Operator(op) => {
                    let n = op.parameter_count().min(ops.len());
                    if op.is_brace() || n < op.minimal_parameter_count() {
                        return None;
                    }
                    let operands = ops.split_off(ops.len() - n);
                    ops.push(AST::Node(op, operands));
                }
            }
        }
        match ops.len() {
            1 => ops.pop(),
            _ => None,
        }
    }
}

// leaves and signed subtrees never need parens around them
const ATOM: usize = usize::MAX;

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn printer(root: &AST) -> (String, usize) {
            match root {
                AST::Leaf(token) => (format!("{}", token), ATOM),
                AST::Node(op, args) => match args.as_slice() {
                    [arg] => {
                        let subtree = printer(arg);
                        if subtree.1 == ATOM {
                            (format!("{}{}", op, subtree.0), ATOM)
                        } else {
                            (format!("{}({})", op, subtree.0), ATOM)
                        }
                    }
                    [lhs, rhs] => {
                        let (lhs, rhs) = (printer(lhs), printer(rhs));
                        let prec = op.precedence();
                        // left associative: only the rhs needs parens on a tie
                        let lh = if prec > lhs.1 {
                            format!("({})", lhs.0)
                        } else {
                            lhs.0
                        };
                        let rh = if prec >= rhs.1 {
                            format!("({})", rhs.0)
                        } else {
                            rhs.0
                        };
                        (format!("{} {} {}", lh, op, rh), prec)
                    }
                    _ => unreachable!(),
                },
            }
        }

        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            None => {
                let postfix = self.0.iter()
                    .map(|token| token.to_string())
                    .collect::<Vec<String>>()
                    .join(" ");
                write!(f, "{}", postfix)
            }
        }
    }
}
