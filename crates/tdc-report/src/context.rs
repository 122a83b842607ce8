use std::borrow::Cow;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Output format of a comparison report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Html,
    Json,
    Text,
}

impl ReportFormat {
    /// File written when no output path is given.
    pub fn default_output(&self) -> &'static str {
        match self {
            ReportFormat::Html => "translation_comparison_report.html",
            ReportFormat::Json => "translation_comparison_report.json",
            ReportFormat::Text => "translation_comparison_report.txt",
        }
    }

    /// Name used in confirmation messages.
    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Html => "HTML",
            ReportFormat::Json => "JSON",
            ReportFormat::Text => "Text",
        }
    }
}

/// What a report is about and when it was generated.
#[derive(Clone, Debug)]
pub struct ReportContext {
    pub source_file: PathBuf,
    pub target_file: PathBuf,
    pub generated_at: DateTime<Local>,
}

impl ReportContext {
    /// A context stamped with the current local time.
    pub fn new(source_file: impl Into<PathBuf>, target_file: impl Into<PathBuf>) -> Self {
        Self::at(source_file, target_file, Local::now())
    }

    pub fn at(
        source_file: impl Into<PathBuf>,
        target_file: impl Into<PathBuf>,
        generated_at: DateTime<Local>,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            target_file: target_file.into(),
            generated_at,
        }
    }

    /// Generation time as `YYYY-MM-DD HH:MM:SS`.
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Language name of the source, taken from its file stem.
    pub fn source_language(&self) -> Cow<'_, str> {
        language(&self.source_file)
    }

    /// Language name of the target, taken from its file stem.
    pub fn target_language(&self) -> Cow<'_, str> {
        language(&self.target_file)
    }
}

fn language(path: &Path) -> Cow<'_, str> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
}
