//! Example grammars built on the combinator algebra.

pub mod arithmetic;
