//! # slrp
//!
//! A simple parser combinator library.
//!
//! Grammars are trees of [`Matcher`]s. Each matcher consumes a prefix of its input and
//! reports the values it captured together with the unconsumed remainder; failure is
//! `None`. Leaves match a regex or a literal at the head of the input, and combinators
//! sequence, repeat, choose between, transform or defer other matchers.
//!
//! Layout
//!
//! - [`capture`]: captured values and the result shape
//! - [`matcher`]: the matching protocol, the shared [`Parser`] handle and [`parse`]
//! - [`leaf`], [`combinators`], [`action`], [`deferred`]: the matchers themselves
//! - [`algebra`]: operators for assembling grammars
//! - [`grammars`]: example grammars
//!
//! ```text
//! use slrp::prelude::*;
//!
//! let count = regex(r"(\d+)")?.apply(|n: Value| n.as_str().map(str::len).unwrap_or(0) as i64);
//! let grammar = count.then(literal(" ")).then(regex(r"(\w+)")?);
//! assert_eq!(grammar.parse("31 muffins", true), Some((vec![Value::Int(2), "muffins".into()], "")));
//! ```

pub mod action;
pub mod algebra;
pub mod capture;
pub mod combinators;
pub mod deferred;
pub mod error;
pub mod grammars;
pub mod leaf;
pub mod matcher;

pub use capture::{format_captures, Captures, MatchResult, Value};
pub use error::{GrammarError, GrammarResult};
pub use matcher::{parse, Matcher, Parser};

/// Everything needed to define and run a grammar.
pub mod prelude {
    pub use crate::action::{Apply, Transform};
    pub use crate::algebra::{
        captured_literal, lazy, literal, one_or_more, optional, regex, zero_or_more, Combinable,
    };
    pub use crate::capture::{Captures, IntoCaptures, MatchResult, Value};
    pub use crate::combinators::{Either, Many, Maybe, Then};
    pub use crate::deferred::Lazy;
    pub use crate::leaf::{LiteralMatcher, RegexMatcher};
    pub use crate::matcher::{parse, Matcher, Parser};
}
