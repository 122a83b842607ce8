use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Where and how to look for translation files in a repository.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory names that mark a translation folder.
    pub directory_names: Vec<String>,
    /// Repository-relative directories to search; `.` is the repository itself.
    pub search_roots: Vec<PathBuf>,
    /// Directory names never descended into.
    pub excluded_directories: Vec<String>,
    /// Glob matched against file names.
    pub file_pattern: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directory_names: ["locales", "translations", "i18n", "lang", "languages", "locale"]
                .map(String::from)
                .to_vec(),
            search_roots: [".", "src", "public", "assets"].map(PathBuf::from).to_vec(),
            excluded_directories: [".git", "node_modules", "target"].map(String::from).to_vec(),
            file_pattern: "*.json".into(),
        }
    }
}

impl ScanConfig {
    /// Whether a directory name marks a translation folder.
    pub fn is_translation_directory(&self, name: &str) -> bool {
        self.directory_names.iter().any(|d| d == name)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_directories.iter().any(|d| d == name)
    }

    /// Search roots resolved against `repo`.
    pub fn roots(&self, repo: &Path) -> Vec<PathBuf> {
        self.search_roots
            .iter()
            .map(|root| {
                if root == Path::new(".") {
                    repo.to_path_buf()
                } else {
                    repo.join(root)
                }
            })
            .collect()
    }
}
