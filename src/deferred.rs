//! Deferred references for recursive grammars.
//!
//! A rule that refers to itself, directly or through other rules, cannot hold its
//! referent by value: building it would never terminate. [`Lazy`] stores a factory and
//! only asks it for the matcher when a match is attempted.
//!
//! The factory runs on every match attempt. Factories that are expensive to run should
//! hand out a clone of a shared [`Parser`](crate::matcher::Parser), typically one held in
//! a `once_cell::sync::Lazy` static:
//!
//! ```text
//! static LIST: Lazy<Parser> = Lazy::new(|| {
//!     literal("(")
//!         .then(zero_or_more(lazy(|| LIST.clone())))
//!         .then(literal(")"))
//!         .boxed()
//! });
//! ```

use crate::capture::MatchResult;
use crate::matcher::Matcher;
use std::fmt;

/// Resolves its matcher through `factory` on each match attempt.
#[derive(Clone)]
pub struct Lazy<F> {
    factory: F,
}

impl<F, M> Lazy<F>
where
    F: Fn() -> M + Send + Sync,
    M: Matcher,
{
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F> fmt::Debug for Lazy<F> {
    // Resolving the referent here would recurse forever on cyclic rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy").finish_non_exhaustive()
    }
}

impl<F, M> Matcher for Lazy<F>
where
    F: Fn() -> M + Send + Sync,
    M: Matcher,
{
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        let matcher = (self.factory)();
        log::trace!("resolved deferred matcher {:?}", matcher);
        matcher.try_match(input)
    }
}
