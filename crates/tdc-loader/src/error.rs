//! Error types for the loader crate.

use std::path::{Path, PathBuf};

/// Why a translation resource could not be turned into a tree.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("file not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// The file exists but is not a JSON object.
    #[error("invalid translation file {}: {reason}", path.display())]
    MalformedResource { path: PathBuf, reason: String },

    /// The file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// The file the error is about.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::ResourceNotFound { path }
            | LoadError::MalformedResource { path, .. }
            | LoadError::Io { path, .. } => path,
        }
    }

    /// Stable snake_case identifier of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::ResourceNotFound { .. } => "resource_not_found",
            LoadError::MalformedResource { .. } => "malformed_resource",
            LoadError::Io { .. } => "io",
        }
    }
}

/// Convenience alias for loader results.
pub type LoadResult<T> = Result<T, LoadError>;
