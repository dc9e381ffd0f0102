//! The matching protocol and the shared grammar handle.
//!
//! Every matcher, leaf or combinator, exposes one operation: try to consume a prefix of
//! the input and report the captured values plus the remainder. Matchers are immutable
//! after construction, so a grammar can be matched any number of times, from any number
//! of threads, without synchronization.

use crate::capture::MatchResult;
use std::fmt;
use std::sync::Arc;

/// Anything that can match a prefix of a string.
pub trait Matcher: fmt::Debug + Send + Sync {
    /// Match against the head of `input`.
    ///
    /// Returns `None` on failure. On success the remainder is a suffix of `input`.
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i>;
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        (**self).try_match(input)
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        (**self).try_match(input)
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        (**self).try_match(input)
    }
}

/// A type-erased, cheaply clonable matcher.
///
/// Named grammar rules are usually stored as `Parser`s so they can be referenced from
/// several places (and from deferred references) without rebuilding them.
#[derive(Clone)]
pub struct Parser {
    inner: Arc<dyn Matcher>,
}

impl Parser {
    pub fn new<M: Matcher + 'static>(matcher: M) -> Self {
        Self {
            inner: Arc::new(matcher),
        }
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl Matcher for Parser {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        self.inner.try_match(input)
    }
}

/// Top-level entry point.
///
/// Runs `matcher` against `input`. With `exact` set, a match that leaves any input
/// unconsumed is treated as a failure and its captures are discarded.
pub fn parse<'i, M: Matcher + ?Sized>(matcher: &M, input: &'i str, exact: bool) -> MatchResult<'i> {
    let (captures, remainder) = matcher.try_match(input)?;
    if exact && !remainder.is_empty() {
        log::debug!(
            "exact parse rejected: {} of {} bytes left unconsumed",
            remainder.len(),
            input.len()
        );
        return None;
    }
    Some((captures, remainder))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::Value;
    use crate::leaf::LiteralMatcher;

    #[test]
    fn test_parse_exact_rejects_leftover() {
        let hello = LiteralMatcher::captured("hello");
        assert_eq!(parse(&hello, "hello world", true), None);
        assert_eq!(
            parse(&hello, "hello world", false),
            Some((vec![Value::from("hello")], " world"))
        );
        assert_eq!(
            parse(&hello, "hello", true),
            Some((vec![Value::from("hello")], ""))
        );
    }

    #[test]
    fn test_parser_handle_is_shared() {
        let parser = Parser::new(LiteralMatcher::new("a"));
        let copy = parser.clone();
        assert_eq!(parser.try_match("ab"), Some((vec![], "b")));
        assert_eq!(copy.try_match("ab"), Some((vec![], "b")));
        assert_eq!(copy.try_match("ba"), None);
    }

    #[test]
    fn test_parser_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Parser>();
    }
}
