//! Path-based exception and restriction matching.
//!
//! Exceptions are anchored partial regexes over canonical dotted paths;
//! restrictions are an exact-string allow-list. Both are consulted for
//! every key the traversal visits.

use regex::Regex;

use crate::error::TripwireError;

/// A compiled exception pattern together with its original spelling.
#[derive(Debug, Clone)]
pub struct ExceptionPattern {
    pattern: String,
    compiled: Regex,
}

impl ExceptionPattern {
    /// Compile an exception pattern.
    ///
    /// Bare `.` separators are escaped so they match only literal dots;
    /// any other regex syntax in the pattern is preserved as written.
    /// The compiled form is anchored to the full canonical path.
    ///
    /// # Errors
    ///
    /// Returns [`TripwireError::InvalidPattern`] if the pattern does not
    /// compile.
    pub fn compile(pattern: &str) -> Result<Self, TripwireError> {
        let anchored = format!("^(?:{})$", escape_separators(pattern));
        let compiled = Regex::new(&anchored).map_err(|source| TripwireError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            compiled,
        })
    }

    /// The pattern as originally supplied.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    fn matches(&self, path: &str) -> bool {
        self.compiled.is_match(path)
    }
}

/// Escape bare `.` to `\.`, leaving already-escaped sequences untouched.
/// `POST.id` and `POST\.id` therefore compile to the same matcher.
fn escape_separators(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut escaped = false;
    for c in pattern.chars() {
        if escaped {
            out.push(c);
            escaped = false;
        } else if c == '\\' {
            out.push(c);
            escaped = true;
        } else if c == '.' {
            out.push_str("\\.");
        } else {
            out.push(c);
        }
    }
    out
}

/// Decides which canonical paths are exempt from inspection and, when a
/// restriction allow-list is configured, which paths may be inspected at
/// all.
///
/// Read operations take `&self` and mutate nothing: repeated calls with
/// the same path and configuration always agree.
#[derive(Debug, Default)]
pub struct PathMatcher {
    exceptions: Vec<ExceptionPattern>,
    restrictions: Vec<String>,
}

impl PathMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exception pattern, compiling it eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`TripwireError::InvalidPattern`] for a pattern that does
    /// not compile; nothing is registered in that case.
    pub fn add_exception(&mut self, pattern: &str) -> Result<(), TripwireError> {
        self.exceptions.push(ExceptionPattern::compile(pattern)?);
        Ok(())
    }

    /// Register an exact restriction path. Appended as-is, no dedup.
    pub fn add_restriction(&mut self, path: impl Into<String>) {
        self.restrictions.push(path.into());
    }

    /// True if `path` matches any configured exception pattern. Patterns
    /// are tried in registration order and the first match wins.
    pub fn is_exception(&self, path: &str) -> bool {
        self.exceptions.iter().any(|e| e.matches(path))
    }

    /// True if `path` may be inspected: either no restrictions are
    /// configured, or the path is exactly (string equality, not pattern
    /// matching) one of them.
    pub fn is_inspectable(&self, path: &str) -> bool {
        self.restrictions.is_empty() || self.restrictions.iter().any(|r| r == path)
    }

    /// Configured exception patterns, in registration order.
    pub fn exceptions(&self) -> impl Iterator<Item = &str> {
        self.exceptions.iter().map(ExceptionPattern::as_str)
    }

    /// Configured restriction paths, in registration order.
    pub fn restrictions(&self) -> &[String] {
        &self.restrictions
    }
}
