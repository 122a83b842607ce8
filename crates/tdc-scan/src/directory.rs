//! File-by-file comparison of two translation directories.

use std::collections::BTreeMap;
use std::path::Path;

use tdc_diff::TranslationAnalysis;
use tdc_loader::{analyze_files, LoadError};
use tracing::{debug, warn};

use crate::discover::find_translation_files;
use crate::error::ScanResult;

/// Why a source file has no analysis.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// No file with the same name exists in the target directory.
    #[error("no matching target file found for {0}")]
    NoMatchingTarget(String),

    /// One of the pair failed to load.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Analysis of one source file, or why it could not be analyzed.
pub type FileOutcome = Result<TranslationAnalysis, FileError>;

/// Per-file results keyed by file name.
#[derive(Debug, Default)]
pub struct DirectoryComparison {
    pub files: BTreeMap<String, FileOutcome>,
}

impl DirectoryComparison {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Successfully analyzed files.
    pub fn analyzed(&self) -> impl Iterator<Item = (&str, &TranslationAnalysis)> {
        self.files
            .iter()
            .filter_map(|(name, outcome)| outcome.as_ref().ok().map(|a| (name.as_str(), a)))
    }

    /// Files that could not be analyzed.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &FileError)> {
        self.files
            .iter()
            .filter_map(|(name, outcome)| outcome.as_ref().err().map(|e| (name.as_str(), e)))
    }

    /// Sum of top-level keys over analyzed files.
    pub fn total_keys(&self) -> usize {
        self.analyzed().map(|(_, a)| a.total_keys).sum()
    }

    /// Mean completion over analyzed files, rounded to two decimals;
    /// `0.0` when nothing was analyzed.
    pub fn overall_completion(&self) -> f64 {
        let (sum, count) = self
            .analyzed()
            .fold((0.0, 0usize), |(sum, count), (_, a)| (sum + a.completion_percentage, count + 1));
        if count == 0 {
            return 0.0;
        }
        let mean = sum / count as f64;
        (mean * 100.0).round() / 100.0
    }
}

/// Compare every file in `source_dir` matching `pattern` with the file of
/// the same name in `target_dir` (defaults to `source_dir`).
pub fn compare_directories(
    source_dir: &Path,
    target_dir: Option<&Path>,
    pattern: &str,
) -> ScanResult<DirectoryComparison> {
    let target_dir = target_dir.unwrap_or(source_dir);
    let source_files = find_translation_files(source_dir, pattern)?;
    let target_files = find_translation_files(target_dir, pattern)?;

    let mut comparison = DirectoryComparison::default();
    for source in &source_files {
        let Some(file_name) = source.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        let target = target_files.iter().find(|t| t.file_name() == source.file_name());

        let outcome = match target {
            Some(target) => analyze_files(source, target).map_err(FileError::from),
            None => Err(FileError::NoMatchingTarget(file_name.clone())),
        };
        if let Err(e) = &outcome {
            warn!(file = %file_name, error = %e, "file not analyzed");
        }
        comparison.files.insert(file_name, outcome);
    }

    debug!(
        files = comparison.len(),
        analyzed = comparison.analyzed().count(),
        "directory comparison complete"
    );
    Ok(comparison)
}
