//! Report rendering for the translation diff checker.
//!
//! Every renderer takes the loader's tagged result, so a missing or
//! malformed file becomes an error report in every format instead of a
//! failure that only some formats handle.
//!
//! # Key Types
//!
//! - [`ReportFormat`] -- HTML, JSON or plain text
//! - [`ReportContext`] -- File names and generation time shown in a report
//! - [`ReportConfig`] -- List limits and truncation widths

pub mod config;
pub mod context;
pub mod error;
pub mod gap;
pub mod html;
pub mod json;
pub mod multi;
pub mod text;

pub use config::ReportConfig;
pub use context::{ReportContext, ReportFormat};
pub use error::{ReportError, ReportResult};
pub use gap::render_gap_html;
pub use html::render_html;
pub use json::render_json;
pub use multi::{render_multi_html, render_multi_text};
pub use text::{render_text, truncate};

use tdc_loader::ComparisonOutcome;

/// Render a comparison (or its load failure) in `format`.
pub fn render(
    format: ReportFormat,
    outcome: &ComparisonOutcome,
    context: &ReportContext,
    config: &ReportConfig,
) -> ReportResult<String> {
    match format {
        ReportFormat::Html => Ok(render_html(outcome, context, config)),
        ReportFormat::Json => render_json(outcome, context),
        ReportFormat::Text => Ok(render_text(outcome, context, config)),
    }
}
