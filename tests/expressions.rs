use shuntyard::{
    ast::BinaryOperator,
    error::{Error, ParseError, RuntimeError},
    evaluate, evaluate_with,
    interpreter::parser::Formula,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_value_with(src: &str, variable: f64, expected: f64) {
    match evaluate_with(src, variable) {
        Ok(value) => {
            assert_eq!(value, expected, "wrong value for {src:?} with {variable}");
        },
        Err(e) => panic!("Expression {src:?} with {variable} failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

#[test]
fn empty_input_evaluates_to_zero() {
    assert_value("", 0.0);
    assert_value(" ", 0.0);
    assert_value("        ", 0.0);
    assert_value_with("", 42.0, 0.0);
}

#[test]
fn spacing_is_insignificant() {
    assert_value("1+2*3", 7.0);
    assert_value(" 1 + 2 * 3 ", 7.0);
    assert_value("1 +2*     3", 7.0);
}

#[test]
fn operator_precedence() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("2-10/5", 0.0);
    assert_value("1+2*3-4", 3.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)", 14.0);
    assert_value("((1+2)*(3+4))", 21.0);
    assert_value("(((7)))", 7.0);
}

#[test]
fn equal_precedence_reduces_left_to_right() {
    assert_value("10-2-3", 5.0);
    assert_value("8/2/2", 2.0);
    assert_value("100/10*2", 20.0);
    assert_value("7-3+1", 5.0);
}

#[test]
fn decimal_literals() {
    assert_value("1.5+2.5", 4.0);
    assert_value("0.5*8", 4.0);
    assert_value("3.25-0.25", 3.0);
}

#[test]
fn variable_substitution() {
    assert_value_with("x+5", 3.0, 8.0);
    assert_value_with("x*x", 4.0, 16.0);
    assert_value_with("(x+1)*(x-1)", 5.0, 24.0);
    assert_value_with("price*price-price", 2.0, 2.0);
}

#[test]
fn variable_defaults_to_zero() {
    assert_value("x+5", 5.0);
}

#[test]
fn variable_value_ignored_for_constant_expressions() {
    assert_value_with("2+2", 99.0, 4.0);
}

#[test]
fn second_variable_is_rejected() {
    match parse_error("x+y") {
        ParseError::SecondVariable { first, second, .. } => {
            assert_eq!(first, "x");
            assert_eq!(second, "y");
        },
        e => panic!("Expected SecondVariable, got {e:?}"),
    }
}

#[test]
fn malformed_expressions_are_rejected() {
    assert!(matches!(parse_error("1+*2"), ParseError::MissingOperand { .. }));
    assert!(matches!(parse_error("1+"), ParseError::MissingOperand { .. }));
    assert!(matches!(parse_error("()"), ParseError::MissingOperand { .. }));
    assert!(matches!(parse_error("1 2"), ParseError::MissingOperator { .. }));
    assert!(matches!(parse_error("2x"), ParseError::MissingOperator { .. }));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(parse_error("(1+2"),
                     ParseError::MissingClosingParenthesis { .. }));
    assert!(matches!(parse_error("1+2)"), ParseError::UnexpectedParenthesis { .. }));
    assert!(matches!(parse_error("((1+2)"),
                     ParseError::MissingClosingParenthesis { .. }));
}

#[test]
fn invalid_characters_are_reported() {
    assert!(matches!(parse_error("1+#2"),
                     ParseError::InvalidCharacter { found: '#', .. }));
    assert!(matches!(parse_error("1\t2"),
                     ParseError::InvalidCharacter { found: '\t', .. }));
    assert!(matches!(parse_error("a = 1"),
                     ParseError::InvalidCharacter { found: '=', .. }));
}

#[test]
fn malformed_number_literals_are_reported() {
    match parse_error("1.2.3") {
        ParseError::InvalidNumber { literal, .. } => assert_eq!(literal, "1.2.3"),
        e => panic!("Expected InvalidNumber, got {e:?}"),
    }
    assert!(matches!(parse_error("7..5+1"), ParseError::InvalidNumber { .. }));
}

#[test]
fn division_by_zero_is_reported() {
    for src in ["1/0", "5/(3-3)"] {
        match evaluate(src) {
            Err(Error::Runtime(RuntimeError::DivisionByZero { .. })) => {},
            other => panic!("Expected division by zero for {src:?}, got {other:?}"),
        }
    }

    match evaluate_with("1/x", 0.0) {
        Err(Error::Runtime(RuntimeError::DivisionByZero { .. })) => {},
        other => panic!("Expected division by zero for a zero variable, got {other:?}"),
    }

    assert_value_with("x/(x-2)", 4.0, 2.0);
}

#[test]
fn formulas_can_be_reused() {
    let formula = Formula::parse("x*x+1").unwrap();
    assert_eq!(formula.variable(), Some("x"));
    assert!(!formula.is_constant());
    assert_eq!(formula.eval(2.0).unwrap(), 5.0);
    assert_eq!(formula.eval(3.0).unwrap(), 10.0);
    assert_eq!(formula.eval(-1.0).unwrap(), 2.0);

    let constant = Formula::parse("6*7").unwrap();
    assert!(constant.is_constant());
    assert_eq!(constant.variable(), None);
    assert_eq!(constant.eval(0.0).unwrap(), 42.0);
}

#[test]
fn operator_registry_lookup() {
    assert_eq!(BinaryOperator::from_symbol('+'), Some(BinaryOperator::Add));
    assert_eq!(BinaryOperator::from_symbol('-'), Some(BinaryOperator::Sub));
    assert_eq!(BinaryOperator::from_symbol('*'), Some(BinaryOperator::Mul));
    assert_eq!(BinaryOperator::from_symbol('/'), Some(BinaryOperator::Div));
    assert_eq!(BinaryOperator::from_symbol('^'), None);

    assert!(BinaryOperator::is_operator('*'));
    assert!(!BinaryOperator::is_operator('x'));

    assert!(BinaryOperator::Div.precedence() > BinaryOperator::Sub.precedence());
    assert_eq!(BinaryOperator::Mul.symbol(), '*');
    assert_eq!(BinaryOperator::Add.to_string(), "+");
}

#[test]
fn evaluation_is_repeatable() {
    for _ in 0..2 {
        assert_value("2+3*4", 14.0);
        assert_value_with("x-1", 10.0, 9.0);
    }
}
