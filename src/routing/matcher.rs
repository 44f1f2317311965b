//! Path pattern compilation and matching.
//!
//! # Responsibilities
//! - Compile route patterns into regular expressions at registration time
//! - Match request paths with full-string semantics
//!
//! # Design Decisions
//! - Full-string match only: the entire path must satisfy the pattern, so
//!   `/foo` does not match `/foobar` even without explicit anchors
//! - Compilation failures surface at registration, never at request time
//! - Match results are discarded; handlers never see capture groups

use regex::Regex;
use thiserror::Error;

/// Error raised when a route pattern fails to compile.
#[derive(Debug, Error)]
#[error("invalid route pattern {pattern:?}: {source}")]
pub struct PatternError {
    /// The pattern as supplied at registration.
    pub pattern: String,
    /// Underlying regex compile error.
    #[source]
    pub source: regex::Error,
}

/// A compiled path pattern with full-string match semantics.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    pattern: String,
    regex: Regex,
}

impl PathMatcher {
    /// Compile a pattern.
    ///
    /// The pattern is compiled wrapped as `^(?:pattern)$`, so a match
    /// always covers the entire path. Explicit anchors in the pattern are
    /// redundant but harmless.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Returns true if the entire path satisfies the pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The pattern as supplied at registration.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
