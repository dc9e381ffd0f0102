//! Errors raised while building a grammar
//!
//! A failed match is never an error: it is `None`. These errors describe grammars that
//! cannot be built at all.

use std::fmt;

/// Errors that can occur during grammar construction
#[derive(Debug, Clone)]
pub enum GrammarError {
    /// A pattern handed to a regex matcher failed to compile
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::InvalidPattern { pattern, source } => {
                write!(f, "Invalid pattern '{}': {}", pattern, source)
            }
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrammarError::InvalidPattern { source, .. } => Some(source),
        }
    }
}

/// Result alias for grammar construction
pub type GrammarResult<T> = Result<T, GrammarError>;
