//! Captured values and the result shape shared by every matcher.
//!
//! A successful match yields a flat, ordered sequence of [`Value`]s together with the
//! unconsumed remainder of the input. Composition only ever concatenates capture
//! sequences; a capture never contains another capture sequence. A [`Value::List`] is
//! a single value that a semantic action chose to build, not a nested capture.

use serde::Serialize;
use std::fmt;

/// A single captured value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A regex group that did not take part in the match
    Nil,
    Str(String),
    Int(i64),
    Float(f64),
    /// A composite value produced by a transform. Counts as one capture.
    List(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of the value. Integers widen to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Nil, Into::into)
    }
}

/// The ordered, flat sequence of values captured by a match.
pub type Captures = Vec<Value>;

/// `Some((captures, remainder))` on success, `None` on failure.
///
/// The remainder is always a suffix of the input that was matched.
pub type MatchResult<'i> = Option<(Captures, &'i str)>;

/// Conversion of a transform's return value into the capture sequence that replaces
/// the inner matcher's captures.
///
/// Scalars become a one-element sequence. A `Vec<Value>` or a tuple becomes the new
/// sequence as-is, and `()` empties it.
pub trait IntoCaptures {
    fn into_captures(self) -> Captures;
}

macro_rules! scalar_into_captures {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoCaptures for $ty {
                fn into_captures(self) -> Captures {
                    vec![Value::from(self)]
                }
            }
        )*
    };
}

scalar_into_captures!(Value, String, &str, i64, f64);

impl IntoCaptures for Vec<Value> {
    fn into_captures(self) -> Captures {
        self
    }
}

impl IntoCaptures for () {
    fn into_captures(self) -> Captures {
        Vec::new()
    }
}

macro_rules! tuple_into_captures {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> IntoCaptures for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_captures(self) -> Captures {
                let ($($name,)+) = self;
                vec![$($name.into()),+]
            }
        }
    };
}

tuple_into_captures!(A);
tuple_into_captures!(A, B);
tuple_into_captures!(A, B, C);
tuple_into_captures!(A, B, C, D);
tuple_into_captures!(A, B, C, D, E);
tuple_into_captures!(A, B, C, D, E, F);

/// Render a capture sequence as a tuple literal: `("31", "muffins")`, `(31,)`, `()`.
pub fn format_captures(captures: &[Value]) -> String {
    let items: Vec<String> = captures.iter().map(ToString::to_string).collect();
    match items.len() {
        1 => format!("({},)", items[0]),
        _ => format!("({})", items.join(", ")),
    }
}
