//! The filter contract and the ordered filter collection.

use serde_json::Value;

/// A single pattern-based detection capability.
///
/// The engine treats a filter as an opaque predicate with a score: it
/// never inspects how the filter decides, only whether a scalar leaf
/// matched, what the match is worth, and how to describe it for the
/// audit trail. Filters must be stateless across invocations within a
/// run.
pub trait Filter: Send + Sync {
    /// Test a single scalar leaf value.
    fn evaluate(&self, value: &Value) -> bool;

    /// Stable identifier for this filter.
    fn id(&self) -> &str;

    /// Impact weight added to the run total for every match.
    fn impact(&self) -> u32;

    /// Structured metadata for audit logging.
    fn describe(&self) -> Value;
}

/// An ordered collection of filters.
///
/// Filters are evaluated in registration order for every inspected leaf.
/// An empty set is legal and produces zero matches.
#[derive(Default)]
pub struct FilterSet {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Append a filter. Registration order determines evaluation order.
    pub fn add<F: Filter + 'static>(&mut self, filter: F) {
        self.filters.push(Box::new(filter));
    }

    /// Append an already-boxed filter.
    pub fn add_boxed(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate filters in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Filter> {
        self.filters.iter().map(|f| f.as_ref())
    }
}

impl std::fmt::Debug for FilterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterSet")
            .field("len", &self.len())
            .finish()
    }
}
