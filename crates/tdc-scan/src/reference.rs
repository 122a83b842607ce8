//! Picking the reference-language file among candidates.

use std::path::{Path, PathBuf};

use tdc_loader::load_tree;
use tracing::debug;

const PRIORITY_PREFIXES: [&str; 2] = ["translations_", "messages_"];

/// Choose the file holding the reference language `lang` (e.g. `"en"`).
///
/// Matching is case-insensitive on the file stem:
///
/// 1. stems equal to `lang`, `translations_<lang>` or `messages_<lang>`;
/// 2. failing that, stems containing `lang`;
/// 3. failing that, no file.
///
/// When candidates carry a `translations_` / `messages_` prefix only those
/// are kept. The candidate with the most top-level keys wins; files that do
/// not load count as empty and the earliest file wins ties.
pub fn find_reference_file(files: &[PathBuf], lang: &str) -> Option<PathBuf> {
    let lang = lang.to_lowercase();
    let exact_stems = [
        lang.clone(),
        format!("translations_{lang}"),
        format!("messages_{lang}"),
    ];

    let mut candidates: Vec<&PathBuf> = files
        .iter()
        .filter(|path| exact_stems.contains(&stem(path)))
        .collect();

    if candidates.is_empty() {
        candidates = files.iter().filter(|path| stem(path).contains(&lang)).collect();
    }

    let prioritized: Vec<&PathBuf> = candidates
        .iter()
        .copied()
        .filter(|path| {
            let name = stem(path);
            PRIORITY_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
        })
        .collect();
    if !prioritized.is_empty() {
        candidates = prioritized;
    }

    let mut best: Option<(&PathBuf, usize)> = None;
    for path in candidates {
        let keys = top_level_key_count(path);
        if best.map_or(true, |(_, most)| keys > most) {
            best = Some((path, keys));
        }
    }

    let chosen = best.map(|(path, _)| path.clone());
    debug!(lang = %lang, chosen = ?chosen, "reference file selection");
    chosen
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn top_level_key_count(path: &Path) -> usize {
    load_tree(path).map(|tree| tree.len()).unwrap_or(0)
}
