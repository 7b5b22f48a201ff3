//! Plain-text report rendering.

use tripwire_core::RunResult;

use crate::registry::{ExportError, ReportFormat};

/// Human-readable, line-oriented rendering: one block per report entry,
/// followed by the run's total impact.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl ReportFormat for TextFormat {
    fn render(&self, result: &RunResult) -> Result<String, ExportError> {
        let mut out = String::new();
        for report in &result.reports {
            out.push_str(&format!("{} => {}\n", report.path, report.value));
            for m in &report.matches {
                out.push_str(&format!("  filter {} (impact {})\n", m.filter_id, m.impact));
            }
        }
        out.push_str(&format!("total impact: {}\n", result.impact));
        Ok(out)
    }
}
