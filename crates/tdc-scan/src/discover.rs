//! Locating translation folders and the files inside them.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};

/// Find directories under `repo` whose name marks them as translation folders.
///
/// Each configured search root that exists is walked recursively. Results
/// are sorted and free of duplicates (search roots may overlap).
pub fn detect_translation_directories(repo: &Path, config: &ScanConfig) -> Vec<PathBuf> {
    let mut found = BTreeSet::new();

    for root in config.roots(repo) {
        if !root.is_dir() {
            continue;
        }
        for entry in walk(&root, config) {
            if entry.depth() > 0
                && entry.file_type().is_dir()
                && config.is_translation_directory(&entry.file_name().to_string_lossy())
            {
                found.insert(entry.into_path());
            }
        }
    }

    debug!(repo = %repo.display(), count = found.len(), "detected translation directories");
    found.into_iter().collect()
}

/// Files directly inside `dir` whose name matches `pattern`, sorted.
pub fn find_translation_files(dir: &Path, pattern: &str) -> ScanResult<Vec<PathBuf>> {
    let pattern = compile(pattern)?;
    let io_err = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        if path.is_file() && matches_name(&pattern, &path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Every file matching the configured pattern beneath any detected
/// translation folder of `repo`, sorted and de-duplicated.
pub fn find_translation_files_in_repo(repo: &Path, config: &ScanConfig) -> ScanResult<Vec<PathBuf>> {
    let pattern = compile(&config.file_pattern)?;
    let mut files = BTreeSet::new();

    for dir in detect_translation_directories(repo, config) {
        for entry in walk(&dir, config) {
            if entry.file_type().is_file() && matches_name(&pattern, entry.path()) {
                files.insert(entry.into_path());
            }
        }
    }

    debug!(repo = %repo.display(), count = files.len(), "found translation files");
    Ok(files.into_iter().collect())
}

fn walk<'a>(root: &Path, config: &'a ScanConfig) -> impl Iterator<Item = DirEntry> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(move |e| !is_excluded(e, config))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
}

fn is_excluded(entry: &DirEntry, config: &ScanConfig) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && config.is_excluded(&entry.file_name().to_string_lossy())
}

fn compile(pattern: &str) -> ScanResult<Pattern> {
    Pattern::new(pattern).map_err(|source| ScanError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

fn matches_name(pattern: &Pattern, path: &Path) -> bool {
    path.file_name()
        .map(|name| pattern.matches(&name.to_string_lossy()))
        .unwrap_or(false)
}
