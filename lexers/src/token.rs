use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Power,
    OpenBrace,
    CloseBrace,
    IntegerDivision,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Modulus),
            '^' => Some(Operator::Power),
            '(' => Some(Operator::OpenBrace),
            ')' => Some(Operator::CloseBrace),
            '\\' => Some(Operator::IntegerDivision),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulus => '%',
            Operator::Power => '^',
            Operator::OpenBrace => '(',
            Operator::CloseBrace => ')',
            Operator::IntegerDivision => '\\',
        }
    }

    // OpenBrace only ever sits on the operator stack as a sentinel, its
    // precedence is never compared against CloseBrace.
    pub fn precedence(self) -> usize {
        match self {
            Operator::CloseBrace => 0,
            Operator::Plus | Operator::Minus => 1,
            Operator::Multiply
            | Operator::Divide
            | Operator::IntegerDivision
            | Operator::Modulus => 2,
            Operator::Power => 3,
            Operator::OpenBrace => 4,
        }
    }

    /// Operands consumed when evaluating.
    pub fn parameter_count(self) -> usize {
        if self.is_brace() { 0 } else { 2 }
    }

    /// Fewest operands the operator can work with, `+` and `-` double as signs.
    pub fn minimal_parameter_count(self) -> usize {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::OpenBrace | Operator::CloseBrace => 0,
            _ => 2,
        }
    }

    pub fn is_brace(self) -> bool {
        matches!(self, Operator::OpenBrace | Operator::CloseBrace)
    }

    pub fn is_sign(self) -> bool {
        matches!(self, Operator::Plus | Operator::Minus)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Token {
    Operand(f64),
    Operator(Operator),
    Function(String), // recognized, never evaluated
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Operand(value) => write!(f, "{}", value),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Function(name) => write!(f, "{}", name),
        }
    }
}
