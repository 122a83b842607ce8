//! Diff engine for the translation diff checker.
//!
//! Walks a source and a target translation tree and classifies every leaf
//! path, producing the data the report renderers consume.
//!
//! # Key Types
//!
//! - [`ClassificationResult`] -- Untranslated / removed / new / changed key paths plus totals
//! - [`Comparison`] / [`KeyDetail`] -- Classification together with the leaf values on both sides
//! - [`TopLevelSummary`] / [`TranslationAnalysis`] -- One verdict per top-level key

pub mod classify;
pub mod comparison;
pub mod summary;

pub use classify::{classify, classify_flat, completion_percentage, ClassificationResult};
pub use comparison::{Category, Comparison, KeyDetail};
pub use summary::{analyze, summarize, EntryKind, SummaryEntry, TopLevelSummary, TranslationAnalysis};
