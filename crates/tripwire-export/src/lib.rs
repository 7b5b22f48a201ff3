//! # Tripwire Export
//!
//! Renders accumulated match reports into caller-facing formats.
//!
//! The engine itself only exposes [`RunResult`](tripwire_core::RunResult)
//! values; this crate turns them into output. Formats are looked up
//! through an explicit [`ExportRegistry`] populated at startup — asking
//! for an unregistered format is an error, never a silent no-op. The
//! built-ins are `text` and `json`.
//!
//! ## Usage
//!
//! ```rust
//! use tripwire_core::RunResult;
//! use tripwire_export::ExportRegistry;
//!
//! let registry = ExportRegistry::new();
//! let rendered = registry.export("text", &RunResult::default()).unwrap();
//! assert_eq!(rendered, "total impact: 0\n");
//! ```

mod json;
mod registry;
mod text;

pub use json::JsonFormat;
pub use registry::{ExportError, ExportRegistry, ReportFormat};
pub use text::TextFormat;
