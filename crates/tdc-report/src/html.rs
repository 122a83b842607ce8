//! Rich HTML comparison report.
//!
//! A single self-contained page: an overview followed by one collapsible
//! card per key category. Bootstrap is loaded from a CDN for styling and
//! the collapse behaviour; the page is readable without it.

use std::borrow::Cow;
use std::fmt::Write;

use tdc_diff::{Category, Comparison, KeyDetail};
use tdc_loader::{ComparisonOutcome, LoadError};

use crate::config::ReportConfig;
use crate::context::ReportContext;
use crate::text::value_text;

const APP_NAME: &str = "Translation Diff Checker";
const PROJECT_URL: &str = "https://github.com/hasanbeder/translation-diff-checker";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.2.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.2.3/dist/js/bootstrap.bundle.min.js";

const STYLE: &str = "
    body { background-color: #f4f6f9; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif; }
    .report-container { max-width: 1000px; margin: 30px auto; background: white; padding: 40px; border-radius: 10px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
    .header { border-bottom: 1px solid #e9ecef; margin-bottom: 30px; padding-bottom: 20px; }
    .section { margin-bottom: 30px; }
    .card-header { display: flex; justify-content: space-between; align-items: center; }
    .section-description { color: #6c757d; font-size: 0.9rem; margin-bottom: 15px; }
    .value { white-space: pre-wrap; word-break: break-word; }
    .footer { margin-top: 40px; padding-top: 20px; border-top: 1px solid #e9ecef; text-align: center; color: #6c757d; }
";

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Overall verdict shown in the overview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranslationStatus {
    Complete,
    NearlyComplete,
    Partial,
    Minimal,
}

impl TranslationStatus {
    pub fn from_completion(percentage: f64, untranslated: usize) -> Self {
        if percentage >= 100.0 && untranslated == 0 {
            TranslationStatus::Complete
        } else if percentage >= 90.0 {
            TranslationStatus::NearlyComplete
        } else if percentage >= 50.0 {
            TranslationStatus::Partial
        } else {
            TranslationStatus::Minimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TranslationStatus::Complete => "✅ Complete",
            TranslationStatus::NearlyComplete => "🟡 Nearly Complete",
            TranslationStatus::Partial => "🚧 Partial",
            TranslationStatus::Minimal => "❌ Minimal",
        }
    }
}

fn category_description(category: Category) -> &'static str {
    match category {
        Category::Untranslated => {
            "Keys present in the source language without a usable translation in the target \
             language: missing entirely, null, or empty."
        }
        Category::Removed => {
            "Keys present in the source language that do not exist in the target language at all."
        }
        Category::New => {
            "Keys that exist in the target language but not in the source language."
        }
        Category::Changed => {
            "Keys present in both languages whose values differ. For a translation this is \
             the expected state; identical values may mean the text was never translated."
        }
    }
}

fn category_button(category: Category) -> &'static str {
    match category {
        Category::Untranslated => "btn-outline-danger",
        Category::Removed => "btn-outline-warning",
        Category::New => "btn-outline-success",
        Category::Changed => "btn-outline-primary",
    }
}

/// Render a comparison, or its load failure, as an HTML page.
pub fn render_html(outcome: &ComparisonOutcome, context: &ReportContext, config: &ReportConfig) -> String {
    match outcome {
        Ok(comparison) => render_comparison(comparison, context, config),
        Err(error) => render_error_html(error, context),
    }
}

pub(crate) fn page_head(out: &mut String, title: &str) {
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<link href=\"{BOOTSTRAP_CSS}\" rel=\"stylesheet\">\n\
         <style>{STYLE}</style>\n</head>\n<body>\n<div class=\"report-container\">\n",
        escape_html(title)
    );
}

pub(crate) fn page_foot(out: &mut String) {
    let _ = write!(
        out,
        "<div class=\"footer\"><a href=\"{PROJECT_URL}\" target=\"_blank\">{APP_NAME}</a></div>\n\
         </div>\n<script src=\"{BOOTSTRAP_JS}\"></script>\n</body>\n</html>\n"
    );
}

fn render_comparison(comparison: &Comparison, context: &ReportContext, config: &ReportConfig) -> String {
    let result = comparison.classification();
    let completion = comparison.completion_percentage();
    let status = TranslationStatus::from_completion(completion, result.untranslated.len());
    let source_lang = context.source_language();
    let target_lang = context.target_language();

    let mut out = String::new();
    page_head(
        &mut out,
        &format!("{APP_NAME}: Translation Diff: {source_lang} → {target_lang}"),
    );

    let _ = write!(
        out,
        "<div class=\"header\">\n<h1 class=\"mb-2\">{APP_NAME}</h1>\n\
         <h5 class=\"text-muted\">Translation Report: {} ↔ {}</h5>\n\
         <small class=\"text-muted\">Generated on: {}</small>\n</div>\n",
        escape_html(&source_lang),
        escape_html(&target_lang),
        context.timestamp()
    );

    let _ = write!(
        out,
        "<div class=\"section\">\n<h3>Overview</h3>\n\
         <p><strong>Source File:</strong> {}</p>\n\
         <p><strong>Target File:</strong> {}</p>\n\
         <p><strong>Total Source Keys:</strong> {}</p>\n\
         <p><strong>Total Target Keys:</strong> {}</p>\n\
         <p><strong>Translated Keys:</strong> {}</p>\n\
         <p><strong>Completion:</strong> {:.2}%</p>\n\
         <p><strong>Translation Status:</strong> {}</p>\n</div>\n",
        escape_html(&context.source_file.to_string_lossy()),
        escape_html(&context.target_file.to_string_lossy()),
        result.total_source_keys,
        result.total_target_keys,
        result.translated_count(),
        completion,
        status.label()
    );

    for category in Category::ALL {
        render_category(&mut out, category, &comparison.details(category), config);
    }

    page_foot(&mut out);
    out
}

fn render_category(out: &mut String, category: Category, details: &[KeyDetail<'_>], config: &ReportConfig) {
    let slug = category.slug();
    let _ = write!(
        out,
        "<div class=\"card mb-4\">\n<div class=\"card-header\">\n<h4>{title} ({count})</h4>\n\
         <button class=\"btn {button}\" type=\"button\" data-bs-toggle=\"collapse\" \
         data-bs-target=\"#{slug}KeysCollapse\" aria-expanded=\"false\" aria-controls=\"{slug}KeysCollapse\">\
         Toggle {title}</button>\n</div>\n\
         <div class=\"card-body collapse\" id=\"{slug}KeysCollapse\">\n\
         <p class=\"section-description\">{description}</p>\n\
         <div class=\"accordion\" id=\"{slug}Accordion\">\n",
        title = category.title(),
        count = details.len(),
        button = category_button(category),
        description = category_description(category),
    );

    for (idx, detail) in details.iter().enumerate() {
        let body = match category {
            Category::Untranslated | Category::Removed => format!(
                "<p class=\"text-muted value\">{}</p>",
                escape_html(&value_text(detail.original_text, config.html_value_width))
            ),
            Category::New => format!(
                "<p class=\"text-muted value\">{}</p>",
                escape_html(&value_text(detail.new_text, config.html_value_width))
            ),
            Category::Changed => format!(
                "<p class=\"text-muted value\">Original: {}</p>\n<p class=\"text-muted value\">New: {}</p>",
                escape_html(&value_text(detail.original_text, config.html_changed_width)),
                escape_html(&value_text(detail.new_text, config.html_changed_width))
            ),
        };
        let _ = write!(
            out,
            "<div class=\"accordion-item\">\n<h2 class=\"accordion-header\" id=\"{slug}-{idx}\">\n\
             <button class=\"accordion-button collapsed\" type=\"button\" data-bs-toggle=\"collapse\" \
             data-bs-target=\"#{slug}-content-{idx}\">{key}</button>\n</h2>\n\
             <div id=\"{slug}-content-{idx}\" class=\"accordion-collapse collapse\" \
             aria-labelledby=\"{slug}-{idx}\" data-bs-parent=\"#{slug}Accordion\">\n\
             <div class=\"accordion-body\">{body}</div>\n</div>\n</div>\n",
            key = escape_html(detail.key.as_str()),
        );
    }

    out.push_str("</div>\n</div>\n</div>\n");
}

/// A titled error page naming the failing file and the cause.
pub fn render_error_html(error: &LoadError, context: &ReportContext) -> String {
    let mut out = String::new();
    page_head(&mut out, &format!("{APP_NAME} - Error"));
    let _ = write!(
        out,
        "<h1 class=\"text-danger\">{APP_NAME} - Error</h1>\n\
         <div class=\"alert alert-danger\">\n\
         <p><strong>Error Message:</strong> {}</p>\n\
         <p><strong>File:</strong> {}</p>\n\
         <p><strong>Source File:</strong> {}</p>\n\
         <p><strong>Target File:</strong> {}</p>\n\
         <p><em>Possible reasons:<br>- File not found<br>- Invalid JSON format<br>- Permission issues</em></p>\n\
         </div>\n<small class=\"text-muted\">Generated on: {}</small>\n",
        escape_html(&error.to_string()),
        escape_html(&error.path().to_string_lossy()),
        escape_html(&context.source_file.to_string_lossy()),
        escape_html(&context.target_file.to_string_lossy()),
        context.timestamp()
    );
    page_foot(&mut out);
    out
}
