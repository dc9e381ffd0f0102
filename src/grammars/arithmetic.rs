//! Arithmetic expressions
//!
//! Two grammars over the same tokens:
//!
//! - [`BINARY_OPERATION`] captures a flat token sequence: `"1+2 + 3"` becomes
//!   `("1", "+", "2", "+", "3")`.
//! - [`EXPRESSION`] evaluates, with the usual precedence and parentheses:
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := factor (("*" | "/") factor)*
//! factor     := number | "-" factor | "(" expression ")"
//! ```
//!
//! `factor` and `expression` refer back to themselves through deferred references; the
//! rules live in statics so resolving a reference is a clone of an `Arc`.

use crate::algebra::{lazy, regex, Combinable};
use crate::capture::{Captures, Value};
use crate::leaf::RegexMatcher;
use crate::matcher::{self, Parser};
use once_cell::sync::Lazy;

fn token(pattern: &str) -> RegexMatcher {
    regex(pattern).unwrap_or_else(|e| panic!("built-in arithmetic pattern: {}", e))
}

/// One of `+ - * /`, whitespace around it consumed.
pub static OPERATOR: Lazy<Parser> = Lazy::new(|| token(r"\s*([-+*/])\s*").boxed());

/// An unsigned integer, whitespace around it consumed.
pub static INTEGER: Lazy<Parser> = Lazy::new(|| token(r"\s*(\d+)\s*").boxed());

/// An operator and its right operand: `"+2"` is `("+", "2")`.
pub static APPLIED_OPERATOR: Lazy<Parser> =
    Lazy::new(|| OPERATOR.clone().then(INTEGER.clone()).boxed());

/// An integer followed by one or more applied operators.
pub static BINARY_OPERATION: Lazy<Parser> = Lazy::new(|| {
    INTEGER
        .clone()
        .then_one_or_more(APPLIED_OPERATOR.clone())
        .boxed()
});

static NUMBER: Lazy<Parser> = Lazy::new(|| {
    token(r"\s*(\d+(?:\.\d+)?)\s*")
        .apply(|digits: Value| {
            Value::from(digits.as_str().and_then(|s| s.parse::<f64>().ok()))
        })
        .boxed()
});

static FACTOR: Lazy<Parser> = Lazy::new(|| {
    let negated = token(r"\s*-")
        .then(lazy(|| FACTOR.clone()))
        .apply(|operand: Value| Value::from(operand.as_float().map(|x| -x)));
    let grouped = token(r"\s*\(")
        .then(lazy(|| EXPRESSION.clone()))
        .then(token(r"\)\s*"));
    NUMBER.clone().or(negated).or(grouped).boxed()
});

static TERM: Lazy<Parser> = Lazy::new(|| {
    FACTOR
        .clone()
        .then(token(r"\s*([*/])\s*").then(FACTOR.clone()).zero_or_more())
        .apply(fold_operations)
        .boxed()
});

/// A full arithmetic expression, evaluated to a single [`Value::Float`].
///
/// Operands that cannot be evaluated fold to [`Value::Nil`].
pub static EXPRESSION: Lazy<Parser> = Lazy::new(|| {
    TERM.clone()
        .then(token(r"\s*([-+])\s*").then(TERM.clone()).zero_or_more())
        .apply(fold_operations)
        .boxed()
});

/// Fold `(operand, operator, operand, operator, operand, ...)` from the left.
fn fold_operations(captures: Captures) -> Value {
    let mut values = captures.into_iter();
    let mut acc = values.next().and_then(|v| v.as_float());
    while let (Some(op), Some(rhs)) = (values.next(), values.next()) {
        acc = match (acc, op.as_str(), rhs.as_float()) {
            (Some(lhs), Some("+"), Some(rhs)) => Some(lhs + rhs),
            (Some(lhs), Some("-"), Some(rhs)) => Some(lhs - rhs),
            (Some(lhs), Some("*"), Some(rhs)) => Some(lhs * rhs),
            (Some(lhs), Some("/"), Some(rhs)) => Some(lhs / rhs),
            _ => None,
        };
    }
    Value::from(acc)
}

/// Evaluate `input`, which must be a complete expression.
pub fn evaluate(input: &str) -> Option<f64> {
    let (captures, _) = matcher::parse(&*EXPRESSION, input, true)?;
    captures.first()?.as_float()
}

/// Split a binary operation into its operand and operator tokens.
pub fn tokenize(input: &str) -> Option<Captures> {
    matcher::parse(&*BINARY_OPERATION, input, true).map(|(captures, _)| captures)
}
