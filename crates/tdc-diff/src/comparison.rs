//! A classification bundled with the flattened values it was computed from.

use serde::Serialize;
use serde_json::Value;
use tdc_types::{flatten, is_translated, FlatTree, KeyPath, Tree};

use crate::classify::{classify_flat, ClassificationResult};

/// One of the four reported key categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Untranslated,
    Removed,
    New,
    Changed,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::Untranslated,
        Category::Removed,
        Category::New,
        Category::Changed,
    ];

    /// Human-readable heading, e.g. `"Untranslated Keys"`.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Untranslated => "Untranslated Keys",
            Category::Removed => "Removed Keys",
            Category::New => "New Keys",
            Category::Changed => "Changed Keys",
        }
    }

    /// Lower-case identifier, e.g. `"untranslated"`.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Untranslated => "untranslated",
            Category::Removed => "removed",
            Category::New => "new",
            Category::Changed => "changed",
        }
    }
}

/// A classified key with the values shown for it in reports.
///
/// `original_text` is the source value and `new_text` the target value;
/// each is present only where the category has that side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct KeyDetail<'a> {
    pub key: &'a KeyPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_text: Option<&'a Value>,
}

/// The outcome of comparing a source tree with a target tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    source: FlatTree,
    target: FlatTree,
    classification: ClassificationResult,
}

impl Comparison {
    /// Flatten and classify two trees.
    pub fn new(source: &Tree, target: &Tree) -> Self {
        Self::from_flat(flatten(source), flatten(target))
    }

    /// Classify two already flattened trees.
    pub fn from_flat(source: FlatTree, target: FlatTree) -> Self {
        let classification = classify_flat(&source, &target);
        Self {
            source,
            target,
            classification,
        }
    }

    pub fn classification(&self) -> &ClassificationResult {
        &self.classification
    }

    pub fn source(&self) -> &FlatTree {
        &self.source
    }

    pub fn target(&self) -> &FlatTree {
        &self.target
    }

    /// Source paths whose translation is present, in source order.
    pub fn translated(&self) -> impl Iterator<Item = &KeyPath> + '_ {
        self.source
            .keys()
            .filter(|path| is_translated(self.target.get(*path)))
    }

    pub fn completion_percentage(&self) -> f64 {
        self.classification.completion_percentage()
    }

    /// Key paths of one category.
    pub fn keys(&self, category: Category) -> &[KeyPath] {
        match category {
            Category::Untranslated => &self.classification.untranslated,
            Category::Removed => &self.classification.removed,
            Category::New => &self.classification.new,
            Category::Changed => &self.classification.changed,
        }
    }

    /// Keys of one category together with their values.
    pub fn details(&self, category: Category) -> Vec<KeyDetail<'_>> {
        self.keys(category)
            .iter()
            .map(|key| {
                let (original_text, new_text) = match category {
                    Category::Untranslated | Category::Removed => (self.source.get(key), None),
                    Category::New => (None, self.target.get(key)),
                    Category::Changed => (self.source.get(key), self.target.get(key)),
                };
                KeyDetail {
                    key,
                    original_text,
                    new_text,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: Value) -> Tree {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn sample() -> Comparison {
        Comparison::new(
            &tree(json!({"HELLO": "Hello", "WELCOME": "Welcome", "BYE": "Bye", "NESTED": {"KEY1": "Nested"}})),
            &tree(json!({"HELLO": "Merhaba", "BYE": "", "NESTED": {"KEY1": "Nested"}, "EXTRA": "Ek"})),
        )
    }

    #[test]
    fn translated_iterates_in_source_order() {
        let comparison = sample();
        let translated: Vec<_> = comparison.translated().map(KeyPath::as_str).collect();
        assert_eq!(translated, vec!["HELLO", "NESTED.KEY1"]);
        assert_eq!(comparison.completion_percentage(), 50.0);
    }

    #[test]
    fn untranslated_details_carry_source_text() {
        let comparison = sample();
        let details = comparison.details(Category::Untranslated);
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].key, "WELCOME");
        assert_eq!(details[0].original_text, Some(&json!("Welcome")));
        assert_eq!(details[0].new_text, None);
        assert_eq!(details[1].key, "BYE");
    }

    #[test]
    fn new_details_carry_target_text() {
        let comparison = sample();
        let details = comparison.details(Category::New);
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].key, "EXTRA");
        assert_eq!(details[0].original_text, None);
        assert_eq!(details[0].new_text, Some(&json!("Ek")));
    }

    #[test]
    fn changed_details_carry_both_sides() {
        let comparison = sample();
        let details = comparison.details(Category::Changed);
        let keys: Vec<_> = details.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["HELLO", "BYE"]);
        assert_eq!(details[0].original_text, Some(&json!("Hello")));
        assert_eq!(details[0].new_text, Some(&json!("Merhaba")));
    }

    #[test]
    fn detail_serialization_omits_missing_side() {
        let comparison = sample();
        let removed = serde_json::to_value(comparison.details(Category::Removed)).unwrap();
        assert_eq!(removed, json!([{"key": "WELCOME", "original_text": "Welcome"}]));
    }

    #[test]
    fn category_labels() {
        assert_eq!(Category::ALL.len(), 4);
        assert_eq!(Category::Changed.title(), "Changed Keys");
        assert_eq!(Category::Untranslated.slug(), "untranslated");
    }
}
