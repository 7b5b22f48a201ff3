//! JSON report rendering.

use tripwire_core::RunResult;

use crate::registry::{ExportError, ReportFormat};

/// Pretty-printed JSON rendering of the full run result.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl ReportFormat for JsonFormat {
    fn render(&self, result: &RunResult) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(result)?)
    }
}
