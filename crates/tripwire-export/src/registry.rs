//! Format registry and the rendering contract.

use std::collections::BTreeMap;

use thiserror::Error;
use tripwire_core::RunResult;

use crate::json::JsonFormat;
use crate::text::TextFormat;

/// Rendering errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested format name has no registered renderer.
    #[error("unsupported export format '{0}'")]
    UnsupportedFormat(String),

    /// A renderer failed to serialize the result.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Renders one run's reports into a concrete output representation.
pub trait ReportFormat: Send + Sync {
    fn render(&self, result: &RunResult) -> Result<String, ExportError>;
}

/// Maps format names to renderers.
///
/// Populated with the built-ins at construction; additional formats are
/// registered explicitly. Looking up an unregistered name is an
/// [`ExportError::UnsupportedFormat`], never a silent no-op.
pub struct ExportRegistry {
    formats: BTreeMap<String, Box<dyn ReportFormat>>,
}

impl ExportRegistry {
    /// Registry with the built-in `text` and `json` formats.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("text", Box::new(TextFormat));
        registry.register("json", Box::new(JsonFormat));
        registry
    }

    /// Registry with no formats registered.
    pub fn empty() -> Self {
        Self {
            formats: BTreeMap::new(),
        }
    }

    /// Register (or replace) a renderer under `name`.
    pub fn register(&mut self, name: impl Into<String>, format: Box<dyn ReportFormat>) {
        self.formats.insert(name.into(), format);
    }

    /// Render `result` with the renderer registered under `name`.
    ///
    /// # Errors
    ///
    /// [`ExportError::UnsupportedFormat`] for an unregistered name;
    /// [`ExportError::Render`] if the renderer fails.
    pub fn export(&self, name: &str, result: &RunResult) -> Result<String, ExportError> {
        let format = self
            .formats
            .get(name)
            .ok_or_else(|| ExportError::UnsupportedFormat(name.to_string()))?;
        format.render(result)
    }

    /// Names of every registered format, sorted.
    pub fn formats(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }
}

impl Default for ExportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExportRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}
