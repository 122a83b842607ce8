//! Structured JSON comparison report.

use serde::Serialize;
use tdc_diff::{Category, Comparison, KeyDetail};
use tdc_loader::{ComparisonOutcome, LoadError};

use crate::context::ReportContext;
use crate::error::ReportResult;

#[derive(Serialize)]
struct ComparisonReport<'a> {
    source_file: String,
    target_file: String,
    generated_at: String,
    total_source_keys: usize,
    total_target_keys: usize,
    completion_percentage: f64,
    untranslated_keys: Vec<KeyDetail<'a>>,
    removed_keys: Vec<KeyDetail<'a>>,
    new_keys: Vec<KeyDetail<'a>>,
    changed_keys: Vec<KeyDetail<'a>>,
}

#[derive(Serialize)]
struct ErrorReport {
    source_file: String,
    target_file: String,
    generated_at: String,
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    kind: &'static str,
    path: String,
    message: String,
}

/// Render a comparison, or its load failure, as pretty-printed JSON.
pub fn render_json(outcome: &ComparisonOutcome, context: &ReportContext) -> ReportResult<String> {
    let rendered = match outcome {
        Ok(comparison) => serde_json::to_string_pretty(&comparison_report(comparison, context))?,
        Err(error) => serde_json::to_string_pretty(&error_report(error, context))?,
    };
    Ok(rendered)
}

fn comparison_report<'a>(comparison: &'a Comparison, context: &ReportContext) -> ComparisonReport<'a> {
    let result = comparison.classification();
    ComparisonReport {
        source_file: context.source_file.to_string_lossy().into_owned(),
        target_file: context.target_file.to_string_lossy().into_owned(),
        generated_at: context.timestamp(),
        total_source_keys: result.total_source_keys,
        total_target_keys: result.total_target_keys,
        completion_percentage: comparison.completion_percentage(),
        untranslated_keys: comparison.details(Category::Untranslated),
        removed_keys: comparison.details(Category::Removed),
        new_keys: comparison.details(Category::New),
        changed_keys: comparison.details(Category::Changed),
    }
}

fn error_report(error: &LoadError, context: &ReportContext) -> ErrorReport {
    ErrorReport {
        source_file: context.source_file.to_string_lossy().into_owned(),
        target_file: context.target_file.to_string_lossy().into_owned(),
        generated_at: context.timestamp(),
        error: ErrorBody {
            kind: error.kind(),
            path: error.path().to_string_lossy().into_owned(),
            message: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::path::PathBuf;
    use tdc_types::Tree;

    fn tree(value: Value) -> Tree {
        value.as_object().cloned().expect("object")
    }

    fn context() -> ReportContext {
        ReportContext::new("en.json", "tr.json")
    }

    #[test]
    fn report_lists_categories_with_values() {
        let outcome = Ok(Comparison::new(
            &tree(json!({"A": "x", "B": "y", "N": {"K": 1}})),
            &tree(json!({"A": "z", "C": "w", "N": {"K": 1}})),
        ));
        let rendered = render_json(&outcome, &context()).unwrap();
        let report: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(report["source_file"], "en.json");
        assert_eq!(report["target_file"], "tr.json");
        assert_eq!(report["total_source_keys"], 3);
        assert_eq!(report["total_target_keys"], 3);
        assert_eq!(report["completion_percentage"], 66.67);
        assert_eq!(report["untranslated_keys"], json!([{"key": "B", "original_text": "y"}]));
        assert_eq!(report["removed_keys"], json!([{"key": "B", "original_text": "y"}]));
        assert_eq!(report["new_keys"], json!([{"key": "C", "new_text": "w"}]));
        assert_eq!(
            report["changed_keys"],
            json!([{"key": "A", "original_text": "x", "new_text": "z"}])
        );
        assert!(report.get("error").is_none());
    }

    #[test]
    fn non_ascii_is_kept_verbatim() {
        let outcome = Ok(Comparison::new(&tree(json!({"G": "Günaydın"})), &Tree::new()));
        let rendered = render_json(&outcome, &context()).unwrap();
        assert!(rendered.contains("Günaydın"));
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn load_failure_renders_error_object() {
        let outcome: ComparisonOutcome = Err(LoadError::MalformedResource {
            path: PathBuf::from("tr.json"),
            reason: "invalid JSON syntax: EOF".into(),
        });
        let rendered = render_json(&outcome, &context()).unwrap();
        let report: Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(report["error"]["kind"], "malformed_resource");
        assert_eq!(report["error"]["path"], "tr.json");
        assert_eq!(
            report["error"]["message"],
            "invalid translation file tr.json: invalid JSON syntax: EOF"
        );
        assert!(report.get("untranslated_keys").is_none());
    }
}
