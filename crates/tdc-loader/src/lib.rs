//! Resource loader for the translation diff checker.
//!
//! Reads UTF-8 JSON translation files (comments tolerated) into
//! [`Tree`](tdc_types::Tree)s and reports failures as typed [`LoadError`]s,
//! so that every report format can render the same failure the same way.
//!
//! # Key Types
//!
//! - [`LoadError`] -- Missing, unreadable or malformed resource
//! - [`LoadedPair`] -- Source and target trees loaded together
//! - [`ComparisonOutcome`] -- A comparison, or the load failure that prevented it

pub mod compare;
pub mod error;
pub mod json;

pub use compare::{analyze_files, compare_files, load_pair, ComparisonOutcome, LoadedPair};
pub use error::{LoadError, LoadResult};
pub use json::{load_tree, parse_tree};
