//! Grammar construction
//!
//! The surface algebra used to assemble grammars from leaves and combinators:
//!
//! | method                 | builds                    |
//! |------------------------|---------------------------|
//! | `a.then(b)`            | `Then(a, b)`              |
//! | `a.then_optional(b)`   | `Then(a, Maybe(b))`       |
//! | `a.optional()`         | `Maybe(a)`                |
//! | `a.then_one_or_more(b)`| `Then(a, Many(b))`        |
//! | `a.one_or_more()`      | `Many(a)`                 |
//! | `a.zero_or_more()`     | `Maybe(Many(a))`          |
//! | `a.or(b)`              | `Either(a, b)`            |
//! | `a.apply(f)`           | `Apply(a, f)`             |
//!
//! Longer sequences are chains of pairwise `then`s, so `a.then(b).then(c)` is
//! `Then(Then(a, b), c)`. Methods keep the concrete combinator types; call
//! [`Combinable::boxed`] to erase them into a [`Parser`].

use crate::action::{Apply, Transform};
use crate::capture::MatchResult;
use crate::combinators::{Either, Many, Maybe, Then};
use crate::deferred::Lazy;
use crate::error::GrammarResult;
use crate::leaf::{LiteralMatcher, RegexMatcher};
use crate::matcher::{self, Matcher, Parser};

/// Grammar-building operators, available on every matcher.
pub trait Combinable: Matcher + Sized {
    fn then<B: Matcher>(self, other: B) -> Then<Self, B> {
        Then::new(self, other)
    }

    fn then_optional<B: Matcher>(self, other: B) -> Then<Self, Maybe<B>> {
        Then::new(self, Maybe::new(other))
    }

    fn optional(self) -> Maybe<Self> {
        Maybe::new(self)
    }

    fn then_one_or_more<B: Matcher>(self, other: B) -> Then<Self, Many<B>> {
        Then::new(self, Many::new(other))
    }

    fn one_or_more(self) -> Many<Self> {
        Many::new(self)
    }

    fn zero_or_more(self) -> Maybe<Many<Self>> {
        Maybe::new(Many::new(self))
    }

    fn or<B: Matcher>(self, other: B) -> Either<Self, B> {
        Either::new(self, other)
    }

    fn apply<F, Args>(self, transform: F) -> Apply<Self, F, Args>
    where
        F: Transform<Args>,
    {
        Apply::new(self, transform)
    }

    fn boxed(self) -> Parser
    where
        Self: 'static,
    {
        Parser::new(self)
    }

    /// See [`matcher::parse`].
    fn parse<'i>(&self, input: &'i str, exact: bool) -> MatchResult<'i> {
        matcher::parse(self, input, exact)
    }
}

impl<M: Matcher> Combinable for M {}

/// A regex matcher anchored at the head of the input.
pub fn regex(pattern: &str) -> GrammarResult<RegexMatcher> {
    RegexMatcher::new(pattern)
}

/// A literal that is consumed but not captured.
pub fn literal(text: impl Into<String>) -> LiteralMatcher {
    LiteralMatcher::new(text)
}

/// A literal that captures its own text.
pub fn captured_literal(text: impl Into<String>) -> LiteralMatcher {
    LiteralMatcher::captured(text)
}

/// A deferred reference, resolved through `factory` at match time.
pub fn lazy<F, M>(factory: F) -> Lazy<F>
where
    F: Fn() -> M + Send + Sync,
    M: Matcher,
{
    Lazy::new(factory)
}

pub fn optional<M: Matcher>(inner: M) -> Maybe<M> {
    inner.optional()
}

pub fn one_or_more<M: Matcher>(inner: M) -> Many<M> {
    inner.one_or_more()
}

pub fn zero_or_more<M: Matcher>(inner: M) -> Maybe<Many<M>> {
    inner.zero_or_more()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Value;

    #[test]
    fn test_chain_is_left_nested() {
        let grammar = literal("a").then(literal("b")).then(captured_literal("c"));
        let debug = format!("{:?}", grammar);
        assert!(debug.starts_with("Then { first: Then {"), "{}", debug);
        assert_eq!(grammar.try_match("abcd"), Some((vec![Value::from("c")], "d")));
    }

    #[test]
    fn test_zero_or_more() {
        let digits = regex(r"(\d)").unwrap().zero_or_more();
        assert_eq!(digits.try_match("x"), Some((vec![], "x")));
        assert_eq!(
            digits.try_match("12x"),
            Some((vec![Value::from("1"), Value::from("2")], "x"))
        );
    }

    #[test]
    fn test_boxed_rules_compose() {
        let sign = captured_literal("-").or(captured_literal("+")).boxed();
        let number = optional(sign.clone()).then(regex(r"(\d+)").unwrap()).boxed();
        assert_eq!(
            number.parse("-12", true),
            Some((vec![Value::from("-"), Value::from("12")], ""))
        );
        assert_eq!(number.parse("12", true), Some((vec![Value::from("12")], "")));
        assert_eq!(number.parse("12 ", true), None);
        assert_eq!(sign.parse("+", true), Some((vec![Value::from("+")], "")));
    }
}
