//! Depth-first traversal of the request data tree.

use serde_json::{json, Value};

use crate::audit::AuditSink;
use crate::filter::FilterSet;
use crate::matcher::PathMatcher;
use crate::report::{FilterMatch, MatchReport, RunContext};

/// Recursive walker over a decoded request data tree.
///
/// Visits every scalar leaf depth-first, left-to-right, maintaining the
/// dotted path to the current node. Each leaf that is neither exempted by
/// an exception pattern nor outside the restriction allow-list is tested
/// against every configured filter in registration order; matches are
/// recorded into the per-run context.
///
/// Borrowed state only: the engine holds references for the duration of
/// one walk and owns nothing across runs.
pub(crate) struct TraversalEngine<'a> {
    filters: &'a FilterSet,
    matcher: &'a PathMatcher,
    audit: &'a dyn AuditSink,
    max_depth: usize,
}

impl<'a> TraversalEngine<'a> {
    pub(crate) fn new(
        filters: &'a FilterSet,
        matcher: &'a PathMatcher,
        audit: &'a dyn AuditSink,
        max_depth: usize,
    ) -> Self {
        Self {
            filters,
            matcher,
            audit,
            max_depth,
        }
    }

    /// Walk `node` at the given nesting level, recording matches into
    /// `ctx`.
    ///
    /// Returns the ids of every filter that matched anywhere in the
    /// subtree, in depth-first traversal order. Side effects on `ctx` are
    /// fully applied once the call returns.
    pub(crate) fn walk(
        &self,
        node: &Value,
        path: &mut Vec<String>,
        depth: usize,
        ctx: &mut RunContext,
    ) -> Vec<String> {
        let mut matched = Vec::new();
        match node {
            Value::Object(map) => {
                for (key, value) in map {
                    self.visit(key, value, path, depth, ctx, &mut matched);
                }
            }
            // Decoded request data makes no map/list distinction; list
            // elements are addressed by their index.
            Value::Array(items) => {
                for (index, value) in items.iter().enumerate() {
                    self.visit(&index.to_string(), value, path, depth, ctx, &mut matched);
                }
            }
            _ => {}
        }
        matched
    }

    fn visit(
        &self,
        key: &str,
        value: &Value,
        path: &mut Vec<String>,
        depth: usize,
        ctx: &mut RunContext,
        matched: &mut Vec<String>,
    ) {
        // Siblings must not inherit a previous sibling's deeper segments.
        path.truncate(depth);
        path.push(key.to_string());
        let canonical = path.join(".");

        if self.matcher.is_exception(&canonical) {
            self.audit
                .info("exception found, path skipped", &json!({ "path": canonical }));
            return;
        }

        if value.is_object() || value.is_array() {
            if depth + 1 > self.max_depth {
                self.audit.info(
                    "nesting depth limit reached, subtree skipped",
                    &json!({ "path": canonical, "max_depth": self.max_depth }),
                );
                return;
            }
            matched.extend(self.walk(value, path, depth + 1, ctx));
            return;
        }

        if !self.matcher.is_inspectable(&canonical) {
            self.audit.info(
                "restrictions enabled, no match on path",
                &json!({ "path": canonical, "restrictions": self.matcher.restrictions() }),
            );
            return;
        }

        for filter in self.filters.iter() {
            if filter.evaluate(value) {
                self.audit.info(
                    "match found on filter",
                    &json!({ "path": canonical, "filter": filter.describe() }),
                );
                matched.push(filter.id().to_string());

                let mut entry = MatchReport::new(canonical.clone(), key, value.clone());
                entry.add_match(FilterMatch {
                    filter_id: filter.id().to_string(),
                    impact: filter.impact(),
                    meta: filter.describe(),
                });
                ctx.record(entry);
            }
        }
    }
}
