//! Leaf matchers
//!
//! The two primitive matchers every grammar bottoms out in: a regular expression
//! anchored at the start of the input, and an exact literal prefix.

use crate::capture::{MatchResult, Value};
use crate::error::{GrammarError, GrammarResult};
use crate::matcher::Matcher;
use regex::Regex;

/// Matches a regular expression at the head of the input.
///
/// Only a match starting at position 0 counts. The pattern is compiled as written, so
/// inline flags such as `(?x)` and trailing comments keep their meaning. Captures are the pattern's groups in group order (none for a pattern without
/// groups). A group that did not participate captures [`Value::Nil`].
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    pattern: String,
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(pattern: &str) -> GrammarResult<Self> {
        let regex = Regex::new(pattern).map_err(|source| GrammarError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for RegexMatcher {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        // Leftmost-first search: if any match starts at 0, this one does.
        let found = self.regex.captures(input)?;
        let whole = found.get(0)?;
        if whole.start() != 0 {
            return None;
        }
        let end = whole.end();
        let captures = found
            .iter()
            .skip(1)
            .map(|group| Value::from(group.map(|m| m.as_str())))
            .collect();
        Some((captures, &input[end..]))
    }
}

/// Matches an exact, case-sensitive literal prefix.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    literal: String,
    capture: bool,
}

impl LiteralMatcher {
    /// A literal that consumes its text without capturing it.
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            capture: false,
        }
    }

    /// A literal that captures its own text on success.
    pub fn captured(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            capture: true,
        }
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl Matcher for LiteralMatcher {
    fn try_match<'i>(&self, input: &'i str) -> MatchResult<'i> {
        let remainder = input.strip_prefix(self.literal.as_str())?;
        let captures = if self.capture {
            vec![Value::Str(self.literal.clone())]
        } else {
            Vec::new()
        };
        Some((captures, remainder))
    }
}
