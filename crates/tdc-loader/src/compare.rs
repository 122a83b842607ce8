//! Load-and-compare entry points.

use std::path::Path;

use tdc_diff::{analyze, Comparison, TranslationAnalysis};
use tdc_types::Tree;

use crate::error::LoadResult;
use crate::json::load_tree;

/// A source and a target tree loaded together.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedPair {
    pub source: Tree,
    pub target: Tree,
}

impl LoadedPair {
    pub fn compare(&self) -> Comparison {
        Comparison::new(&self.source, &self.target)
    }

    pub fn analyze(&self) -> TranslationAnalysis {
        analyze(&self.source, &self.target)
    }
}

/// Load both files. The source is loaded first, so when both are
/// missing the source is the one reported.
pub fn load_pair(source: &Path, target: &Path) -> LoadResult<LoadedPair> {
    Ok(LoadedPair {
        source: load_tree(source)?,
        target: load_tree(target)?,
    })
}

/// A comparison, or the load failure that prevented it.
///
/// Every renderer takes this type, so a missing or malformed file is
/// reported the same way whatever the output format.
pub type ComparisonOutcome = LoadResult<Comparison>;

/// Load both files and classify their leaves.
pub fn compare_files(source: &Path, target: &Path) -> ComparisonOutcome {
    load_pair(source, target).map(|pair| pair.compare())
}

/// Load both files and compute top-level completion figures.
pub fn analyze_files(source: &Path, target: &Path) -> LoadResult<TranslationAnalysis> {
    load_pair(source, target).map(|pair| pair.analyze())
}
