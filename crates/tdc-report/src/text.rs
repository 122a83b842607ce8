//! Plain-text comparison report.

use std::borrow::Cow;
use std::fmt::Write;

use serde_json::Value;
use tdc_diff::{Category, Comparison, KeyDetail};
use tdc_loader::{ComparisonOutcome, LoadError};
use tdc_types::leaf_text;

use crate::config::ReportConfig;
use crate::context::ReportContext;

const TITLE: &str = "Translation Comparison Report";

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => Cow::Owned(format!("{}...", &text[..end])),
        None => Cow::Borrowed(text),
    }
}

/// Truncated display form of an optional leaf.
pub(crate) fn value_text(value: Option<&Value>, max_chars: usize) -> String {
    match value {
        Some(value) => truncate(&leaf_text(value), max_chars).into_owned(),
        None => "N/A".to_owned(),
    }
}

/// Render a comparison, or its load failure, as plain text.
pub fn render_text(outcome: &ComparisonOutcome, context: &ReportContext, config: &ReportConfig) -> String {
    match outcome {
        Ok(comparison) => render_comparison(comparison, context, config),
        Err(error) => render_error(error, context),
    }
}

fn render_comparison(comparison: &Comparison, context: &ReportContext, config: &ReportConfig) -> String {
    let result = comparison.classification();
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}\n", "=".repeat(30));
    let _ = writeln!(out, "Source File: {}", context.source_file.display());
    let _ = writeln!(out, "Target File: {}", context.target_file.display());
    let _ = writeln!(out, "Generated: {}\n", context.timestamp());
    let _ = writeln!(out, "Total Source Keys: {}", result.total_source_keys);
    let _ = writeln!(out, "Total Target Keys: {}", result.total_target_keys);
    let _ = writeln!(out, "Completion: {:.2}%", comparison.completion_percentage());

    for category in Category::ALL {
        let details = comparison.details(category);
        let _ = writeln!(out, "\n{} ({})", category.title(), details.len());
        for detail in details.iter().take(config.list_limit) {
            let _ = writeln!(out, "- {}", detail_line(category, detail, config));
        }
        if details.len() > config.list_limit {
            let _ = writeln!(out, "... and {} more", details.len() - config.list_limit);
        }
    }

    out
}

fn detail_line(category: Category, detail: &KeyDetail<'_>, config: &ReportConfig) -> String {
    match category {
        Category::Untranslated | Category::Removed => format!(
            "{}: {}",
            detail.key,
            value_text(detail.original_text, config.text_value_width)
        ),
        Category::New => format!(
            "{}: {}",
            detail.key,
            value_text(detail.new_text, config.text_value_width)
        ),
        Category::Changed => format!(
            "{}: {} → {}",
            detail.key,
            value_text(detail.original_text, config.text_changed_width),
            value_text(detail.new_text, config.text_changed_width)
        ),
    }
}

fn render_error(error: &LoadError, context: &ReportContext) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}\n", "=".repeat(30));
    let _ = writeln!(out, "Error: {error}");
    let _ = writeln!(out, "File: {}", error.path().display());
    let _ = writeln!(out, "Source File: {}", context.source_file.display());
    let _ = writeln!(out, "Target File: {}", context.target_file.display());
    let _ = writeln!(out, "Generated: {}", context.timestamp());
    out
}
