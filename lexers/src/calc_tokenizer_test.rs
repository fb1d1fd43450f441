use crate::calc_tokenizer::parse_tokens;
use crate::{LexError, Operator, Separators, Token};

fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    parse_tokens(input, Separators::default())
}

#[test]
fn leading_sign_folds() {
    assert_eq!(lex("-5+3").unwrap(), [
        Token::Operand(-5.0),
        Token::Operator(Operator::Plus),
        Token::Operand(3.0),
    ]);
    assert_eq!(lex("+5").unwrap(), [Token::Operand(5.0)]);
}

#[test]
fn sign_after_operator_folds() {
    let expect = [
        Token::Operand(3.0),
        Token::Operator(Operator::Plus),
        Token::Operand(-2.0),
    ];
    assert_eq!(lex("3+-2").unwrap(), expect);

    let expect = [
        Token::Operand(3.0),
        Token::Operator(Operator::Minus),
        Token::Operand(-2.0),
    ];
    assert_eq!(lex("3 - -2").unwrap(), expect);

    let expect = [
        Token::Operand(2.0),
        Token::Operator(Operator::Power),
        Token::Operand(-3.0),
    ];
    assert_eq!(lex("2^-3").unwrap(), expect);

    let expect = [
        Token::Operator(Operator::OpenBrace),
        Token::Operand(-1.0),
        Token::Operator(Operator::CloseBrace),
    ];
    assert_eq!(lex("(-1)").unwrap(), expect);
}

#[test]
fn binary_minus_stays() {
    let expect = [
        Token::Operand(3.0),
        Token::Operator(Operator::Minus),
        Token::Operand(2.0),
    ];
    assert_eq!(lex("3-2").unwrap(), expect);

    let expect = [
        Token::Operator(Operator::OpenBrace),
        Token::Operand(3.0),
        Token::Operator(Operator::CloseBrace),
        Token::Operator(Operator::Minus),
        Token::Operand(1.0),
    ];
    assert_eq!(lex("(3)-1").unwrap(), expect);
}

#[test]
fn sign_before_brace_is_kept() {
    // nothing to fold into, the evaluator treats it as unary
    let expect = [
        Token::Operator(Operator::Minus),
        Token::Operator(Operator::OpenBrace),
        Token::Operand(2.0),
        Token::Operator(Operator::CloseBrace),
    ];
    assert_eq!(lex("-(2)").unwrap(), expect);
}

#[test]
fn decimals_and_groups() {
    assert_eq!(lex("1,234.5").unwrap(), [Token::Operand(1234.5)]);
    assert_eq!(lex(".5").unwrap(), [Token::Operand(0.5)]);

    let de = Separators::new(',', '.');
    assert_eq!(parse_tokens("1.234,5", de).unwrap(), [Token::Operand(1234.5)]);
    assert_eq!(parse_tokens("-0,25", de).unwrap(), [Token::Operand(-0.25)]);
}

#[test]
fn whitespace_groups() {
    let fr = Separators::new(',', '\u{a0}');
    assert_eq!(parse_tokens("1 234,5", fr).unwrap(), [Token::Operand(1234.5)]);
    assert_eq!(parse_tokens("1\u{a0}000 + 1", fr).unwrap(), [
        Token::Operand(1000.0),
        Token::Operator(Operator::Plus),
        Token::Operand(1.0),
    ]);
    // without a blank separator whitespace splits numbers
    assert_eq!(lex("2 3").unwrap(), [Token::Operand(2.0), Token::Operand(3.0)]);
}

#[test]
fn stray_separator() {
    let fr = Separators::new(',', '\u{a0}');
    assert_eq!(
        parse_tokens("2+.5", fr),
        Err(LexError::StraySeparator { ch: '.', pos: 2 })
    );
    // once digits are buffered the other separator is accepted
    assert_eq!(parse_tokens("2.5", fr).unwrap(), [Token::Operand(2.5)]);
}

#[test]
fn bad_number() {
    assert_eq!(
        lex("3*."),
        Err(LexError::BadNumber { lexeme: format!("."), pos: 2 })
    );
    assert_eq!(lex("1+,").unwrap_err().offset(), Some(2));
}

#[test]
fn unknown_char() {
    let err = lex("12 $ 4").unwrap_err();
    assert_eq!(err, LexError::UnknownChar { ch: '$', pos: 3 });
    assert_eq!(err.offset(), Some(3));
    assert_eq!(err.to_string(), "unable to parse character '$' at position 3");
}

#[test]
fn no_tokens() {
    assert_eq!(lex(""), Err(LexError::NoTokens));
    assert_eq!(lex(" \t\n"), Err(LexError::NoTokens));
    assert_eq!(LexError::NoTokens.to_string(), "no tokens found");
}
