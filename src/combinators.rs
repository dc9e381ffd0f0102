//! Structural combinators: sequence, optional, repetition and alternative.
//!
//! Each combinator owns its children and hands the remainder of one child to the next.
//! Failure propagates upward immediately; the only recoveries are the fallback branch
//! of [`Either`] and the empty success of [`Maybe`].

use crate::capture::MatchResult;
use crate::matcher::Matcher;

/// `first`, then `second` against what `first` left over.
///
/// Captures are `first`'s followed by `second`'s.
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Matcher, B: Matcher> Matcher for Then<A, B> {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        let (mut captures, rest) = self.first.try_match(input)?;
        let (next, remainder) = self.second.try_match(rest)?;
        captures.extend(next);
        Some((captures, remainder))
    }
}

/// The inner matcher, or an empty success that consumes nothing. Never fails.
#[derive(Debug, Clone)]
pub struct Maybe<M> {
    inner: M,
}

impl<M> Maybe<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Matcher> Matcher for Maybe<M> {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        self.inner
            .try_match(input)
            .or_else(|| Some((Vec::new(), input)))
    }
}

/// One or more repetitions of the inner matcher, captures concatenated.
///
/// Repetition stops when the inner matcher fails or when a repetition consumes nothing.
/// The captures of that final zero-width repetition are kept. Fails only when the first
/// attempt fails; wrap in [`Maybe`] for zero-or-more.
#[derive(Debug, Clone)]
pub struct Many<M> {
    inner: M,
}

impl<M> Many<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

impl<M: Matcher> Matcher for Many<M> {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        let (mut captures, mut rest) = self.inner.try_match(input)?;
        let mut fed = input;
        // The remainder is always a suffix of what was fed, so equal length means no progress.
        while rest.len() != fed.len() {
            let Some((next, remainder)) = self.inner.try_match(rest) else {
                break;
            };
            captures.extend(next);
            fed = rest;
            rest = remainder;
        }
        Some((captures, rest))
    }
}

/// `left` if it matches, otherwise `right`.
///
/// A successful `left` is final: nothing that fails later in an enclosing sequence
/// causes `right` to be tried.
#[derive(Debug, Clone)]
pub struct Either<A, B> {
    left: A,
    right: B,
}

impl<A, B> Either<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Matcher, B: Matcher> Matcher for Either<A, B> {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        self.left
            .try_match(input)
            .or_else(|| self.right.try_match(input))
    }
}
