//! JSON ruleset loading.
//!
//! A ruleset file carries an ordered list of signature definitions:
//!
//! ```json
//! {
//!   "filters": [
//!     {
//!       "id": "42",
//!       "rule": "(?i)union\\s+select",
//!       "description": "UNION-based SQL injection",
//!       "tags": ["sqli"],
//!       "impact": 8
//!     }
//!   ]
//! }
//! ```
//!
//! Every rule is compiled while loading; a ruleset that parses is a
//! ruleset whose every pattern is known-good.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tripwire_core::FilterSet;

use crate::signature::RegexFilter;

/// Errors raised while loading a ruleset. All are registration-time.
#[derive(Debug, Error)]
pub enum RulesetError {
    /// The ruleset file could not be read.
    #[error("could not read ruleset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ruleset document is not valid JSON of the expected shape.
    #[error("malformed ruleset: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rule pattern failed to compile.
    #[error("invalid rule for filter '{id}': {source}")]
    InvalidRule {
        id: String,
        #[source]
        source: regex::Error,
    },
}

/// One signature definition as it appears in a ruleset file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    pub id: String,
    pub rule: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub impact: u32,
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    filters: Vec<RuleDef>,
}

/// Parse a JSON ruleset document, compiling every rule eagerly.
///
/// # Errors
///
/// [`RulesetError::Parse`] for a malformed document,
/// [`RulesetError::InvalidRule`] for the first rule whose pattern does
/// not compile.
pub fn from_json(json: &str) -> Result<FilterSet, RulesetError> {
    let file: RuleFile = serde_json::from_str(json)?;
    compile(file.filters)
}

/// Load a JSON ruleset from disk.
///
/// # Errors
///
/// [`RulesetError::Io`] if the file cannot be read, plus everything
/// [`from_json`] can return.
pub fn from_file(path: impl AsRef<Path>) -> Result<FilterSet, RulesetError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| RulesetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&raw)
}

/// Compile rule definitions into a filter set, preserving their order.
pub fn compile(defs: Vec<RuleDef>) -> Result<FilterSet, RulesetError> {
    let mut filters = FilterSet::new();
    for def in defs {
        let filter = RegexFilter::new(&def.id, &def.rule, def.impact)
            .map_err(|source| RulesetError::InvalidRule {
                id: def.id.clone(),
                source,
            })?
            .with_description(def.description)
            .with_tags(def.tags);
        filters.add(filter);
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const RULESET: &str = r#"{
        "filters": [
            {"id": "1", "rule": "(?i)<\\s*script", "description": "script tag", "tags": ["xss"], "impact": 8},
            {"id": "2", "rule": "\\d+", "impact": 3}
        ]
    }"#;

    #[test]
    fn test_load_preserves_order_and_defaults() {
        let filters = from_json(RULESET).unwrap();
        assert_eq!(filters.len(), 2);

        let ids: Vec<&str> = filters.iter().map(|f| f.id()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        let impacts: Vec<u32> = filters.iter().map(|f| f.impact()).collect();
        assert_eq!(impacts, vec![8, 3]);
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let err = from_json("{ not json").unwrap_err();
        assert!(matches!(err, RulesetError::Parse(_)));

        let err = from_json(r#"{"filters": [{"id": "1"}]}"#).unwrap_err();
        assert!(matches!(err, RulesetError::Parse(_)));
    }

    #[test]
    fn test_bad_rule_names_offending_filter() {
        let doc = r#"{"filters": [{"id": "broken", "rule": "[", "impact": 1}]}"#;
        let err = from_json(doc).unwrap_err();
        match err {
            RulesetError::InvalidRule { id, .. } => assert_eq!(id, "broken"),
            other => panic!("expected InvalidRule, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(RULESET.as_bytes()).unwrap();

        let filters = from_file(file.path()).unwrap();
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = from_file("/nonexistent/rules.json").unwrap_err();
        assert!(matches!(err, RulesetError::Io { .. }));
    }
}
