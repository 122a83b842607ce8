//! Top-level summary view: one verdict per top-level source key.
//!
//! Unlike [`classify`](crate::classify), which reports every leaf, this view
//! collapses each top-level subtree into a single entry that is translated
//! only when every leaf beneath it is. Its counts therefore differ from the
//! leaf-level counts whenever the source nests keys.

use serde::Serialize;
use serde_json::Value;
use tdc_types::{flatten, is_translated, Tree};

use crate::classify::completion_percentage;

/// Shape of a top-level source entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Leaf,
    Subtree,
}

/// Verdict for one top-level source key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub key: String,
    pub kind: EntryKind,
    pub translated: bool,
}

/// Verdicts for every top-level source key, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TopLevelSummary {
    pub entries: Vec<SummaryEntry>,
}

impl TopLevelSummary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of translated entries.
    pub fn translated_count(&self) -> usize {
        self.entries.iter().filter(|e| e.translated).count()
    }

    /// Keys of untranslated entries.
    pub fn untranslated_keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.translated)
            .map(|e| e.key.as_str())
    }
}

/// Build the top-level summary of `source` against `target`.
///
/// A top-level leaf is translated when the target holds a non-empty value
/// under the same key (a nested mapping counts as present). A top-level
/// subtree is translated when the target holds a mapping under that key and
/// every leaf of the source subtree is translated within it.
pub fn summarize(source: &Tree, target: &Tree) -> TopLevelSummary {
    let entries = source
        .iter()
        .map(|(key, value)| {
            let target_value = target.get(key);
            match value {
                Value::Object(subtree) => SummaryEntry {
                    key: key.clone(),
                    kind: EntryKind::Subtree,
                    translated: subtree_translated(subtree, target_value),
                },
                _ => SummaryEntry {
                    key: key.clone(),
                    kind: EntryKind::Leaf,
                    translated: is_translated(target_value),
                },
            }
        })
        .collect();

    TopLevelSummary { entries }
}

fn subtree_translated(source: &Tree, target: Option<&Value>) -> bool {
    let Some(Value::Object(target)) = target else {
        return false;
    };
    let target_leaves = flatten(target);
    flatten(source)
        .keys()
        .all(|path| is_translated(target_leaves.get(path)))
}

/// Completion figures from the top-level summary view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TranslationAnalysis {
    pub total_keys: usize,
    pub translated_keys: usize,
    pub untranslated_keys: Vec<String>,
    pub completion_percentage: f64,
}

impl TranslationAnalysis {
    /// Derive the figures from a summary.
    pub fn from_summary(summary: &TopLevelSummary) -> Self {
        let total_keys = summary.len();
        let translated_keys = summary.translated_count();
        Self {
            total_keys,
            translated_keys,
            untranslated_keys: summary.untranslated_keys().map(str::to_owned).collect(),
            completion_percentage: completion_percentage(translated_keys, total_keys),
        }
    }
}

/// Summarize `source` against `target` and compute completion figures.
pub fn analyze(source: &Tree, target: &Tree) -> TranslationAnalysis {
    TranslationAnalysis::from_summary(&summarize(source, target))
}
