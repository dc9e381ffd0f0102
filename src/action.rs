//! Semantic actions
//!
//! [`Apply`] runs a matcher and replaces its whole capture sequence with whatever a
//! transform makes of it. Transforms receive the captures as positional arguments, so a
//! transform's arity is part of the grammar: handing it a different number of captures
//! is a bug in the grammar, and it panics instead of failing the match.

use crate::capture::{Captures, IntoCaptures, MatchResult, Value};
use crate::matcher::Matcher;
use std::fmt;
use std::marker::PhantomData;

/// A function that turns a capture sequence into a new one.
///
/// `Args` only selects the implementation: `()`, `(Value,)`, `(Value, Value)`, ... for
/// closures taking that many [`Value`]s, or [`Captures`] for closures that take the
/// whole sequence regardless of its length.
pub trait Transform<Args>: Send + Sync {
    /// Number of captures the transform expects, `None` if it takes any number.
    fn arity(&self) -> Option<usize>;

    /// Apply the transform.
    ///
    /// # Panics
    ///
    /// If the transform has a fixed arity and `captures` has a different length.
    fn call(&self, captures: Captures) -> Captures;
}

fn arity_mismatch(expected: usize, found: usize) -> ! {
    panic!(
        "transform expects {} capture(s) but the matched input produced {}",
        expected, found
    )
}

macro_rules! value_for {
    ($_arg:ident) => {
        Value
    };
}

macro_rules! impl_transform {
    ($arity:literal $(, $arg:ident)*) => {
        impl<F, R> Transform<($(value_for!($arg),)*)> for F
        where
            F: Fn($(value_for!($arg)),*) -> R + Send + Sync,
            R: IntoCaptures,
        {
            fn arity(&self) -> Option<usize> {
                Some($arity)
            }

            fn call(&self, captures: Captures) -> Captures {
                let [$($arg),*]: [Value; $arity] = captures
                    .try_into()
                    .unwrap_or_else(|rejected: Captures| arity_mismatch($arity, rejected.len()));
                (self)($($arg),*).into_captures()
            }
        }
    };
}

impl_transform!(0);
impl_transform!(1, a);
impl_transform!(2, a, b);
impl_transform!(3, a, b, c);
impl_transform!(4, a, b, c, d);
impl_transform!(5, a, b, c, d, e);
impl_transform!(6, a, b, c, d, e, g);

impl<F, R> Transform<Captures> for F
where
    F: Fn(Captures) -> R + Send + Sync,
    R: IntoCaptures,
{
    fn arity(&self) -> Option<usize> {
        None
    }

    fn call(&self, captures: Captures) -> Captures {
        (self)(captures).into_captures()
    }
}

/// Match `inner`, then replace its captures with `transform`'s result.
pub struct Apply<M, F, Args> {
    inner: M,
    transform: F,
    args: PhantomData<fn(Args)>,
}

impl<M, F, Args> Apply<M, F, Args>
where
    F: Transform<Args>,
{
    pub fn new(inner: M, transform: F) -> Self {
        Self {
            inner,
            transform,
            args: PhantomData,
        }
    }
}

impl<M: Clone, F: Clone, Args> Clone for Apply<M, F, Args> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            transform: self.transform.clone(),
            args: PhantomData,
        }
    }
}

impl<M: fmt::Debug, F: Transform<Args>, Args> fmt::Debug for Apply<M, F, Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Apply")
            .field("inner", &self.inner)
            .field("arity", &self.transform.arity())
            .finish_non_exhaustive()
    }
}

impl<M, F, Args> Matcher for Apply<M, F, Args>
where
    M: Matcher,
    F: Transform<Args>,
{
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        let (captures, remainder) = self.inner.try_match(input)?;
        Some((self.transform.call(captures), remainder))
    }
}
