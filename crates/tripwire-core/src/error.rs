//! Error types for the tripwire engine.

use thiserror::Error;

/// Engine error type.
///
/// Only configuration-time problems surface as errors. A run itself never
/// fails: unexpected leaf shapes are simply "not matched", and skipped
/// paths are audit events, not errors.
#[derive(Debug, Error)]
pub enum TripwireError {
    /// Invalid or missing configuration source. Fatal to setup.
    #[error("configuration error: {0}")]
    Config(String),

    /// An exception pattern failed to compile. Rejected at registration
    /// time rather than failing closed during a run.
    #[error("invalid exception pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },
}
