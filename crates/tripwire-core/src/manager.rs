//! The engine facade: configuration state and the run entry point.

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::audit::{AuditSink, NoopAudit};
use crate::config::Config;
use crate::filter::FilterSet;
use crate::matcher::PathMatcher;
use crate::report::{MatchReport, RunContext, RunResult};
use crate::traversal::TraversalEngine;
use crate::Result;

/// Default bound on nesting depth before a subtree is skipped.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Orchestrates filter execution over decoded request data.
///
/// A `Manager` is long-lived and reusable across runs: it owns the filter
/// set, the exception/restriction configuration, optional settings, and
/// the audit sink. All mid-run accumulation lives in a per-call context,
/// and [`run`](Self::run) returns the finished [`RunResult`] as a value.
///
/// # Thread Safety
///
/// `run` takes `&mut self`, so two runs can never execute concurrently
/// against the same instance; the instance itself is `Send` and can move
/// between threads freely.
///
/// # Example
///
/// ```rust,ignore
/// let mut manager = Manager::new(filters);
/// manager.add_exception("POST.csrf_token")?;
///
/// let result = manager.run(&request_data);
/// if result.impact >= threshold {
///     reject(result.reports);
/// }
/// ```
pub struct Manager {
    /// Filters to execute, in registration order.
    filters: FilterSet,

    /// Exception patterns and restriction paths.
    matcher: PathMatcher,

    /// Optional named settings for collaborators.
    config: Option<Config>,

    /// Injected audit sink.
    audit: Box<dyn AuditSink>,

    /// Nesting depth bound for the traversal.
    max_depth: usize,

    /// Retained copy of the most recent run's result.
    last_run: RunResult,
}

impl Manager {
    /// Create a manager over the given filter set with a no-op audit
    /// sink.
    pub fn new(filters: FilterSet) -> Self {
        Self::with_audit(filters, Box::new(NoopAudit))
    }

    /// Create a manager with an injected audit sink.
    pub fn with_audit(filters: FilterSet, audit: Box<dyn AuditSink>) -> Self {
        Self {
            filters,
            matcher: PathMatcher::new(),
            config: None,
            audit,
            max_depth: DEFAULT_MAX_DEPTH,
            last_run: RunResult::default(),
        }
    }

    /// Run every configured filter against the given data tree.
    ///
    /// Walks the tree depth-first, skipping exception paths, honoring the
    /// restriction allow-list, and evaluating filters in registration
    /// order against every remaining scalar leaf.
    ///
    /// The returned result is always complete: a run never aborts part
    /// way through, and anomalies (skips, unexpected leaf shapes) are
    /// audit events rather than errors. The most recent result also
    /// stays readable through [`reports`](Self::reports) and
    /// [`impact`](Self::impact) until the next call; state is replaced
    /// per run, never accumulated across runs.
    pub fn run(&mut self, data: &Value) -> RunResult {
        self.audit.info(
            "executing filters on request data",
            &json!({ "digest": digest(data) }),
        );

        let engine = TraversalEngine::new(
            &self.filters,
            &self.matcher,
            self.audit.as_ref(),
            self.max_depth,
        );
        let mut ctx = RunContext::default();
        let mut path = Vec::new();
        engine.walk(data, &mut path, 0, &mut ctx);

        let result = ctx.into_result();
        self.last_run = result.clone();
        result
    }

    /// Report entries from the most recent run.
    pub fn reports(&self) -> &[MatchReport] {
        &self.last_run.reports
    }

    /// Total impact score of the most recent run.
    pub fn impact(&self) -> u32 {
        self.last_run.impact
    }

    /// Discard the retained result of the most recent run.
    pub fn reset(&mut self) {
        self.last_run = RunResult::default();
    }

    /// Exempt every path matching `pattern` from inspection.
    ///
    /// # Errors
    ///
    /// Returns [`TripwireError::InvalidPattern`](crate::TripwireError::InvalidPattern)
    /// for a pattern that does not compile.
    pub fn add_exception(&mut self, pattern: impl AsRef<str>) -> Result<()> {
        self.matcher.add_exception(pattern.as_ref())
    }

    /// Register several exception patterns at once. Patterns preceding
    /// the first invalid one stay registered.
    pub fn add_exceptions<I, S>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            self.matcher.add_exception(pattern.as_ref())?;
        }
        Ok(())
    }

    /// Restrict inspection to exactly `path`, in addition to any
    /// restriction paths already registered.
    pub fn add_restriction(&mut self, path: impl Into<String>) {
        self.matcher.add_restriction(path);
    }

    /// Register several restriction paths at once.
    pub fn add_restrictions<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for path in paths {
            self.matcher.add_restriction(path);
        }
    }

    /// Configured exception patterns, in registration order.
    pub fn exceptions(&self) -> Vec<&str> {
        self.matcher.exceptions().collect()
    }

    /// Configured restriction paths, in registration order.
    pub fn restrictions(&self) -> &[String] {
        self.matcher.restrictions()
    }

    /// The configured filter set.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Attach configuration settings.
    pub fn set_config(&mut self, config: Config) {
        self.config = Some(config);
    }

    /// Load configuration from an INI-style TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TripwireError::Config`](crate::TripwireError::Config) if
    /// the file cannot be read or parsed.
    pub fn set_config_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        self.config = Some(Config::from_file(path)?);
        Ok(())
    }

    /// Attached configuration settings, if any.
    pub fn config(&self) -> Option<&Config> {
        self.config.as_ref()
    }

    /// Replace the audit sink.
    pub fn set_audit(&mut self, audit: Box<dyn AuditSink>) {
        self.audit = audit;
    }

    /// Bound the nesting depth the traversal will follow.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("filters", &self.filters.len())
            .field("exceptions", &self.matcher.exceptions().count())
            .field("restrictions", &self.matcher.restrictions().len())
            .field("impact", &self.last_run.impact)
            .finish()
    }
}

/// Hex SHA-256 digest of the canonical JSON rendering of `data`, logged
/// at run start so audit events for one run can be correlated.
fn digest(data: &Value) -> String {
    let hash = Sha256::digest(data.to_string().as_bytes());
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
