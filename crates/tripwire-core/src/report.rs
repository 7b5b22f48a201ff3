//! Match reports and the per-run result value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One filter that matched a leaf, as recorded in a report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterMatch {
    /// The matching filter's identifier.
    pub filter_id: String,
    /// The filter's impact weight.
    pub impact: u32,
    /// The filter's `describe()` metadata at match time.
    pub meta: Value,
}

/// A record of one leaf value and a filter that matched it.
///
/// Entries accumulate in traversal order and are never deduplicated: a
/// leaf that trips several filters appears once per match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Canonical dotted path of the leaf (e.g. `POST.user.bio`).
    pub path: String,
    /// The leaf's own key, i.e. the last path segment.
    pub key: String,
    /// The leaf value that matched.
    pub value: Value,
    /// Filters that matched, in evaluation order.
    pub matches: Vec<FilterMatch>,
}

impl MatchReport {
    pub fn new(path: impl Into<String>, key: impl Into<String>, value: Value) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            value,
            matches: Vec::new(),
        }
    }

    /// Record a filter match against this leaf.
    pub fn add_match(&mut self, m: FilterMatch) {
        self.matches.push(m);
    }

    /// Sum of the impact weights recorded in this entry.
    pub fn impact(&self) -> u32 {
        self.matches.iter().map(|m| m.impact).sum()
    }
}

/// The complete, immutable outcome of one run.
///
/// Invariant: `impact` equals the sum of the impact weight of every
/// filter referenced across `reports`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Report entries in depth-first traversal order.
    pub reports: Vec<MatchReport>,
    /// Total impact score for the run.
    pub impact: u32,
}

impl RunResult {
    /// True when no filter matched anywhere in the data.
    pub fn is_clean(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Mutable accumulation state threaded through one traversal. Owned by a
/// single run call, never shared across invocations.
#[derive(Debug, Default)]
pub(crate) struct RunContext {
    reports: Vec<MatchReport>,
    impact: u32,
}

impl RunContext {
    pub(crate) fn record(&mut self, report: MatchReport) {
        self.impact = self.impact.saturating_add(report.impact());
        self.reports.push(report);
    }

    pub(crate) fn into_result(self) -> RunResult {
        RunResult {
            reports: self.reports,
            impact: self.impact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(path: &str, impact: u32) -> MatchReport {
        let mut report = MatchReport::new(path, path.rsplit('.').next().unwrap(), json!("value"));
        report.add_match(FilterMatch {
            filter_id: "f1".to_string(),
            impact,
            meta: json!({ "id": "f1" }),
        });
        report
    }

    #[test]
    fn test_context_sums_impact() {
        let mut ctx = RunContext::default();
        ctx.record(entry("POST.id", 5));
        ctx.record(entry("POST.bio", 7));

        let result = ctx.into_result();
        assert_eq!(result.impact, 12);
        assert_eq!(result.reports.len(), 2);
        assert!(!result.is_clean());
    }

    #[test]
    fn test_empty_context_is_clean() {
        let result = RunContext::default().into_result();
        assert!(result.is_clean());
        assert_eq!(result.impact, 0);
    }

    #[test]
    fn test_result_serialization() {
        let mut ctx = RunContext::default();
        ctx.record(entry("POST.id", 5));
        let result = ctx.into_result();

        let encoded = serde_json::to_string(&result).unwrap();
        let parsed: RunResult = serde_json::from_str(&encoded).unwrap();
        assert_eq!(parsed, result);
    }
}
