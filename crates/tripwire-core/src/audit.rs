//! Audit logging sink.
//!
//! The engine reports run starts, path skips, and filter matches through
//! an injected [`AuditSink`]. The default is [`NoopAudit`]; wiring a sink
//! is never required for the engine to operate.

use serde_json::Value;

/// Structured audit sink consumed by the engine.
pub trait AuditSink: Send + Sync {
    /// Record one audit event with structured context.
    fn info(&self, message: &str, context: &Value);
}

/// Discards every audit event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAudit;

impl AuditSink for NoopAudit {
    fn info(&self, _message: &str, _context: &Value) {}
}

/// Forwards audit events to the `tracing` ecosystem as info events under
/// the `tripwire::audit` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn info(&self, message: &str, context: &Value) {
        tracing::info!(target: "tripwire::audit", context = %context, "{message}");
    }
}
