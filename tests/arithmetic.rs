//! Tests for the example arithmetic grammars

use rstest::rstest;
use slrp::grammars::arithmetic::{
    evaluate, tokenize, APPLIED_OPERATOR, BINARY_OPERATION, EXPRESSION, OPERATOR,
};
use slrp::{format_captures, Matcher, Value};

#[rstest]
#[case("+")]
#[case("-")]
#[case("*")]
#[case("/")]
fn test_operator(#[case] input: &str) {
    assert_eq!(OPERATOR.try_match(input), Some((vec![Value::from(input)], "")));
}

#[rstest]
#[case("+2", &["+", "2"])]
#[case("-2", &["-", "2"])]
#[case("*2", &["*", "2"])]
#[case("/2", &["/", "2"])]
fn test_applied_operator(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<Value> = expected.iter().map(|v| Value::from(*v)).collect();
    assert_eq!(APPLIED_OPERATOR.try_match(input), Some((expected, "")));
}

#[rstest]
#[case("1+2", &["1", "+", "2"])]
#[case("1 + 2", &["1", "+", "2"])]
#[case("1+2 + 3", &["1", "+", "2", "+", "3"])]
fn test_binary_operation(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<Value> = expected.iter().map(|v| Value::from(*v)).collect();
    assert_eq!(BINARY_OPERATION.try_match(input), Some((expected.clone(), "")));
    assert_eq!(tokenize(input), Some(expected));
}

#[test]
fn test_tokens_render() {
    let tokens = tokenize("12 * 3 - 4").unwrap();
    insta::assert_snapshot!(format_captures(&tokens), @r#"("12", "*", "3", "-", "4")"#);
}

#[rstest]
#[case("42", 42.0)]
#[case("1 + 2 * 3", 7.0)]
#[case("(1 + 2) * 3", 9.0)]
#[case("2 * (3 + (4 - 1)) / 4", 3.0)]
#[case("10 - 4 - 3", 3.0)]
#[case("-3 * -2", 6.0)]
#[case("1 - -1", 2.0)]
#[case(" 1.5 + 1.25 ", 2.75)]
#[case("((((7))))", 7.0)]
fn test_evaluate(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(evaluate(input), Some(expected));
}

#[rstest]
#[case("")]
#[case("1 +")]
#[case("(1 + 2")]
#[case("1 + 2)")]
#[case("one + two")]
fn test_evaluate_rejects(#[case] input: &str) {
    assert_eq!(evaluate(input), None);
}

#[test]
fn test_expression_partial_match() {
    assert_eq!(
        EXPRESSION.try_match("1 + 2 )"),
        Some((vec![Value::Float(3.0)], ")"))
    );
}

#[test]
fn test_deep_nesting() {
    let depth = 50;
    let input = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&input), Some(1.0));
}
