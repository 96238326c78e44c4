use pretty_assertions::assert_eq;
use shunt::{evaluate_expression, ShuntError};
use shunt_lexer::{LexError, LexErrorKind};

fn lex_kind(input: &str) -> LexErrorKind {
    tests::init_test_logger();
    match evaluate_expression(input, false) {
        Err(ShuntError::Lex(LexError { kind, .. })) => kind,
        other => panic!("expected {input:?} to be rejected by the tokenizer, got {other:?}"),
    }
}

#[test]
fn malformed_expressions_fail_with_a_message() {
    let cases = [
        ("-10*(2", LexErrorKind::UnbalancedParenthesis),
        ("-10+*2", LexErrorKind::MissingOperand),
        ("-10*()", LexErrorKind::InvalidParenthesis),
        ("-10*log()", LexErrorKind::InvalidParenthesis),
        ("log(1,4,1234)", LexErrorKind::InvalidSeparator),
        ("2(10)", LexErrorKind::ImplicitMultiplication),
    ];
    for (input, kind) in cases {
        assert_eq!(lex_kind(input), kind, "{input}");
        let message = evaluate_expression(input, true).unwrap_err().to_string();
        assert!(!message.is_empty());
    }
}

#[test]
fn more_lexical_failures() {
    assert_eq!(lex_kind("log(1)"), LexErrorKind::InvalidLogStatement);
    assert_eq!(lex_kind("++log(1,4)"), LexErrorKind::ConsecutiveUnary);
    assert_eq!(lex_kind("(1+)"), LexErrorKind::OperatorBeforeClose);
    assert_eq!(lex_kind("1.2.3"), LexErrorKind::InvalidFloat);
    assert_eq!(lex_kind("lag(1,2)"), LexErrorKind::InvalidOperator);
    assert_eq!(lex_kind("2 & 3"), LexErrorKind::InvalidInput);
    assert_eq!(lex_kind("(1),2"), LexErrorKind::InvalidSeparator);
}

#[test]
fn empty_input_is_rejected_by_the_tokenizer() {
    for input in ["", "   ", "\t"] {
        let err = evaluate_expression(input, false).unwrap_err();
        assert!(!err.is_internal(), "{input:?}");
        assert_eq!(lex_kind(input), LexErrorKind::EmptyExpression);
    }
}

#[test]
fn binary_minus_after_separator_reaches_the_evaluator() {
    // "," is not an operand-expecting token, so this "-" is binary
    let err = evaluate_expression("log(2,-4)", false).unwrap_err();
    assert!(matches!(err, ShuntError::Eval(_)), "{err:?}");
}
