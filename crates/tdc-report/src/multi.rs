//! Reports over a whole directory comparison.

use std::fmt::Write;

use tdc_scan::DirectoryComparison;

use crate::context::ReportContext;
use crate::html::{escape_html, page_foot, page_head};

/// Plain-text summary of every compared file.
pub fn render_multi_text(comparison: &DirectoryComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Multi-File Translation Analysis Report");
    let _ = writeln!(out, "{}\n", "=".repeat(50));

    for (file, outcome) in &comparison.files {
        let _ = writeln!(out, "File: {file}");
        match outcome {
            Ok(analysis) => {
                let _ = writeln!(out, "Total Keys: {}", analysis.total_keys);
                let _ = writeln!(out, "Translated Keys: {}", analysis.translated_keys);
                let _ = writeln!(out, "Completion: {:.2}%", analysis.completion_percentage);
                if !analysis.untranslated_keys.is_empty() {
                    let _ = writeln!(out, "Untranslated Keys:");
                    for key in &analysis.untranslated_keys {
                        let _ = writeln!(out, "  - {key}");
                    }
                }
            }
            Err(error) => {
                let _ = writeln!(out, "Error: {error}");
            }
        }
        let _ = writeln!(out, "{}\n", "-".repeat(30));
    }

    let _ = writeln!(out, "Overall Completion: {:.2}%", comparison.overall_completion());
    out
}

/// HTML table of every compared file with the overall completion.
pub fn render_multi_html(comparison: &DirectoryComparison, context: &ReportContext) -> String {
    let mut out = String::new();
    page_head(&mut out, "Multi-File Translation Analysis Report");

    let _ = write!(
        out,
        "<div class=\"header\">\n<h1 class=\"mb-2\">Multi-File Translation Analysis Report</h1>\n\
         <small class=\"text-muted\">Generated on: {}</small>\n</div>\n\
         <div class=\"section\">\n\
         <p><strong>Files:</strong> {}</p>\n\
         <p><strong>Total Keys:</strong> {}</p>\n\
         <p><strong>Overall Completion:</strong> {:.2}%</p>\n</div>\n\
         <table class=\"table table-striped\">\n\
         <thead><tr><th>File</th><th>Total Keys</th><th>Translated Keys</th>\
         <th>Completion</th><th>Untranslated Keys</th></tr></thead>\n<tbody>\n",
        context.timestamp(),
        comparison.len(),
        comparison.total_keys(),
        comparison.overall_completion(),
    );

    for (file, outcome) in &comparison.files {
        match outcome {
            Ok(analysis) => {
                let untranslated = analysis
                    .untranslated_keys
                    .iter()
                    .map(|key| escape_html(key).into_owned())
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = write!(
                    out,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}%</td><td>{}</td></tr>\n",
                    escape_html(file),
                    analysis.total_keys,
                    analysis.translated_keys,
                    analysis.completion_percentage,
                    untranslated
                );
            }
            Err(error) => {
                let _ = write!(
                    out,
                    "<tr class=\"table-danger\"><td>{}</td><td colspan=\"4\">Error: {}</td></tr>\n",
                    escape_html(file),
                    escape_html(&error.to_string())
                );
            }
        }
    }

    out.push_str("</tbody>\n</table>\n");
    page_foot(&mut out);
    out
}
