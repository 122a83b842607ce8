//! HTML gap analysis: how far a target is from the source, with the source
//! text of the first untranslated keys.

use std::fmt::Write;

use tdc_diff::TranslationAnalysis;
use tdc_loader::{LoadResult, LoadedPair};
use tdc_types::{find_value, leaf_text, Tree};

use crate::config::ReportConfig;
use crate::context::ReportContext;
use crate::html::{escape_html, page_foot, page_head, render_error_html};
use crate::text::truncate;

/// Completion band shown at the top of a gap analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GapStatus {
    Excellent,
    Good,
    NeedsWork,
    Critical,
}

impl GapStatus {
    pub fn from_completion(percentage: f64) -> Self {
        if percentage > 90.0 {
            GapStatus::Excellent
        } else if percentage > 75.0 {
            GapStatus::Good
        } else if percentage > 50.0 {
            GapStatus::NeedsWork
        } else {
            GapStatus::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GapStatus::Excellent => "Excellent",
            GapStatus::Good => "Good",
            GapStatus::NeedsWork => "Needs Work",
            GapStatus::Critical => "Critical",
        }
    }

    fn alert_class(&self) -> &'static str {
        match self {
            GapStatus::Excellent => "alert-success",
            GapStatus::Good => "alert-info",
            GapStatus::NeedsWork => "alert-warning",
            GapStatus::Critical => "alert-danger",
        }
    }
}

/// Render the gap analysis of a loaded pair, or the error page when
/// loading failed.
pub fn render_gap_html(
    loaded: &LoadResult<LoadedPair>,
    context: &ReportContext,
    config: &ReportConfig,
) -> String {
    match loaded {
        Ok(pair) => render_analysis(&pair.analyze(), &pair.source, context, config),
        Err(error) => render_error_html(error, context),
    }
}

fn render_analysis(
    analysis: &TranslationAnalysis,
    source: &Tree,
    context: &ReportContext,
    config: &ReportConfig,
) -> String {
    let status = GapStatus::from_completion(analysis.completion_percentage);
    let mut out = String::new();
    page_head(
        &mut out,
        &format!(
            "Translation Gap Analysis: {} → {}",
            context.source_language(),
            context.target_language()
        ),
    );

    let _ = write!(
        out,
        "<div class=\"header\">\n<h1 class=\"mb-2\">Translation Gap Analysis</h1>\n\
         <h5 class=\"text-muted\">{} → {}</h5>\n\
         <small class=\"text-muted\">Generated on: {}</small>\n</div>\n\
         <div class=\"alert {}\"><strong>Status:</strong> {} ({:.2}% complete)</div>\n\
         <div class=\"section\">\n<h3>Summary</h3>\n\
         <p><strong>Total Keys:</strong> {}</p>\n\
         <p><strong>Translated Keys:</strong> {}</p>\n\
         <p><strong>Untranslated Keys:</strong> {}</p>\n</div>\n",
        escape_html(&context.source_language()),
        escape_html(&context.target_language()),
        context.timestamp(),
        status.alert_class(),
        status.label(),
        analysis.completion_percentage,
        analysis.total_keys,
        analysis.translated_keys,
        analysis.untranslated_keys.len(),
    );

    if !analysis.untranslated_keys.is_empty() {
        out.push_str(
            "<div class=\"section\">\n<h3>Untranslated Keys</h3>\n\
             <table class=\"table table-striped\">\n\
             <thead><tr><th>Key</th><th>Original Text</th></tr></thead>\n<tbody>\n",
        );
        for key in analysis.untranslated_keys.iter().take(config.gap_limit) {
            let original = match find_value(source, key) {
                Some(found) => {
                    truncate(&leaf_text(found.value), config.gap_value_width).into_owned()
                }
                None => "No original text found".to_owned(),
            };
            let _ = write!(
                out,
                "<tr><td><code>{}</code></td><td class=\"value\">{}</td></tr>\n",
                escape_html(key),
                escape_html(&original)
            );
        }
        out.push_str("</tbody>\n</table>\n");
        if analysis.untranslated_keys.len() > config.gap_limit {
            let _ = write!(
                out,
                "<p class=\"text-muted\">... and {} more</p>\n",
                analysis.untranslated_keys.len() - config.gap_limit
            );
        }
        out.push_str("</div>\n");
    }

    page_foot(&mut out);
    out
}
