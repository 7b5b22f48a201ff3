//! # Tripwire Filters
//!
//! Concrete signature catalog for the tripwire inspection engine.
//!
//! The engine in `tripwire-core` only knows the [`Filter`] contract; this
//! crate supplies the filters themselves: a regex-backed implementation,
//! a built-in catalog of injection signatures, and a JSON ruleset loader
//! for site-specific rules.
//!
//! ## Signature classes
//!
//! | Class | Tags | Examples |
//! |-------|------|----------|
//! | Cross-site scripting | `xss` | script tags, event handlers, `javascript:` URIs |
//! | SQL injection | `sqli` | UNION SELECT, tautologies, comment breakouts |
//! | Path traversal | `lfi` | `../` sequences |
//! | Command injection | `rce` | chained binaries, command substitution |
//! | Protocol tricks | `evasion`, `splitting` | null bytes, CRLF header injection |
//!
//! ## Usage
//!
//! ```rust
//! use tripwire_core::Manager;
//! use tripwire_filters::default_filters;
//!
//! let mut manager = Manager::new(default_filters());
//! let result = manager.run(&serde_json::json!({
//!     "POST": { "q": "' OR '1'='1" }
//! }));
//! assert!(result.impact > 0);
//! ```
//!
//! Custom rules load from JSON with the same shape the built-ins use:
//! every pattern is compiled while loading, so a malformed rule is a
//! loading error rather than a silent non-match at inspection time.

pub mod catalog;
pub mod ruleset;
mod signature;

pub use catalog::default_filters;
pub use ruleset::{RuleDef, RulesetError};
pub use signature::RegexFilter;

#[doc(no_inline)]
pub use tripwire_core::Filter;
