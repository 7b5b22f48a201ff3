//! # Tripwire Core
//!
//! Filter-execution engine for inspecting decoded request data.
//!
//! Given an arbitrarily nested map of request data (form fields, query
//! parameters, headers), the engine walks every scalar leaf, tests it
//! against an ordered collection of pattern filters, and produces a
//! structured report of matches plus an aggregate impact score usable
//! for blocking and alerting decisions.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        TRIPWIRE CORE                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │                    ┌─────────────────┐                          │
//! │                    │     Manager     │  ← Facade                │
//! │                    └────────┬────────┘                          │
//! │                             │                                   │
//! │         ┌───────────────────┼───────────────────┐               │
//! │         ▼                   ▼                   ▼               │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────┐          │
//! │  │  Traversal  │    │    Path     │    │   Filter    │          │
//! │  │   Engine    │    │   Matcher   │    │     Set     │          │
//! │  └──────┬──────┘    └─────────────┘    └─────────────┘          │
//! │         │                                                       │
//! │         ▼                                                       │
//! │  ┌─────────────┐                                                │
//! │  │  RunResult  │  reports + impact                              │
//! │  └─────────────┘                                                │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Inspection pipeline
//!
//! For every key the traversal visits, in the container's natural order:
//!
//! | Step | Component | Outcome |
//! |------|-----------|---------|
//! | Exception check | PathMatcher | Matching paths skipped entirely |
//! | Restriction check | PathMatcher | Non-listed leaves skipped when an allow-list is set |
//! | Filter fan-out | FilterSet | Every filter evaluated in registration order |
//! | Accumulation | RunResult | One report entry per match, impact summed |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tripwire_core::{FilterSet, Manager};
//!
//! let mut manager = Manager::new(filters);
//! manager.add_exception("POST.csrf_token")?;
//!
//! let result = manager.run(&request_data);
//! println!("impact: {}", result.impact);
//! for report in &result.reports {
//!     println!("{} tripped {} filter(s)", report.path, report.matches.len());
//! }
//! ```
//!
//! ## Security Notes
//!
//! - A run never aborts: the caller always receives a complete result.
//! - Exception patterns are compiled and validated at registration time;
//!   a malformed pattern is an error, never a silent non-match.
//! - All run accumulation is per-call state. `run` takes `&mut self`, so
//!   one instance cannot execute two runs concurrently.
//! - The engine decides nothing: it reports matches and a score, and the
//!   caller decides whether to block, log, or escalate.

mod audit;
mod config;
mod error;
mod filter;
mod manager;
mod matcher;
mod report;
mod traversal;

pub use audit::{AuditSink, NoopAudit, TracingAudit};
pub use config::Config;
pub use error::TripwireError;
pub use filter::{Filter, FilterSet};
pub use manager::{Manager, DEFAULT_MAX_DEPTH};
pub use matcher::{ExceptionPattern, PathMatcher};
pub use report::{FilterMatch, MatchReport, RunResult};

/// Core result type for configuration-time operations.
pub type Result<T> = std::result::Result<T, TripwireError>;
