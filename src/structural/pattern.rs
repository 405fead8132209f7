// ============================================================================
// Pattern
// Compiled regular expression with source-text identity
// ============================================================================

use regex::Regex;
use std::fmt;

/// A compiled regular expression that compares by its source text.
///
/// Two patterns are equal exactly when they were compiled from the same
/// source. Cloning shares the compiled program, which is immutable, so a
/// clone behaves identically to a fresh compilation of the same source.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from its source text.
    ///
    /// # Errors
    /// Returns the underlying `regex::Error` when the source is not a valid
    /// pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    /// The source text the pattern was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern matches anywhere in `text`.
    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Borrow the compiled regex for richer operations (captures, splits).
    #[inline]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}
