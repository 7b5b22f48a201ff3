//! Regex-backed implementation of the core filter contract.

use std::borrow::Cow;

use regex::Regex;
use serde_json::{json, Value};
use tripwire_core::Filter;

/// A pattern-based filter: one compiled regex with an identifier, an
/// impact weight, and descriptive metadata.
#[derive(Debug, Clone)]
pub struct RegexFilter {
    id: String,
    rule: Regex,
    description: String,
    tags: Vec<String>,
    impact: u32,
}

impl RegexFilter {
    /// Compile a filter from its rule pattern.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] if the rule does not
    /// compile.
    pub fn new(id: impl Into<String>, rule: &str, impact: u32) -> Result<Self, regex::Error> {
        Ok(Self {
            id: id.into(),
            rule: Regex::new(rule)?,
            description: String::new(),
            tags: Vec::new(),
            impact,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The rule pattern as supplied.
    pub fn rule(&self) -> &str {
        self.rule.as_str()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Text rendering of a scalar leaf for matching. Strings match as-is;
/// numbers and booleans match against their display form, so a numeric
/// leaf `123` is inspected like the string `"123"`.
fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

impl Filter for RegexFilter {
    fn evaluate(&self, value: &Value) -> bool {
        scalar_text(value).is_some_and(|text| self.rule.is_match(&text))
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn impact(&self) -> u32 {
        self.impact
    }

    fn describe(&self) -> Value {
        json!({
            "id": self.id,
            "rule": self.rule.as_str(),
            "description": self.description,
            "tags": self.tags,
            "impact": self.impact,
        })
    }
}
