//! Repository scanning for the translation diff checker.
//!
//! Locates translation folders by their conventional names, lists the
//! resource files inside them, picks the reference-language file among
//! candidates, and compares whole directories file by file.
//!
//! # Key Types
//!
//! - [`ScanConfig`] -- Folder names, search roots and file pattern
//! - [`DirectoryComparison`] / [`FileOutcome`] -- Per-file results of a directory comparison

pub mod config;
pub mod directory;
pub mod discover;
pub mod error;
pub mod reference;

pub use config::ScanConfig;
pub use directory::{compare_directories, DirectoryComparison, FileError, FileOutcome};
pub use discover::{detect_translation_directories, find_translation_files, find_translation_files_in_repo};
pub use error::{ScanError, ScanResult};
pub use reference::find_reference_file;
