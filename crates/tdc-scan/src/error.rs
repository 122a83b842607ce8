//! Error types for the scan crate.

use std::path::PathBuf;

/// Errors that can occur while scanning for translation files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The file name pattern is not a valid glob.
    #[error("invalid file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A directory could not be listed.
    #[error("cannot read directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for scan results.
pub type ScanResult<T> = Result<T, ScanError>;
