//! Leaf-level classification of a source tree against a target tree.
//!
//! Both trees are flattened to `KeyPath -> value` maps. Source paths whose
//! target value is missing, `null` or empty are untranslated; the missing
//! ones are also removed. Target-only paths are new, and paths whose values
//! differ are changed.

use serde::Serialize;
use tdc_types::{flatten, is_translated, FlatTree, KeyPath, Tree};

/// The four-way classification of two trees.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Source paths that are absent, `null` or empty in the target.
    pub untranslated: Vec<KeyPath>,
    /// Source paths absent from the target. Always a subset of `untranslated`.
    pub removed: Vec<KeyPath>,
    /// Target paths absent from the source.
    pub new: Vec<KeyPath>,
    /// Paths present on both sides whose values differ.
    pub changed: Vec<KeyPath>,
    /// Number of leaves in the source.
    pub total_source_keys: usize,
    /// Number of leaves in the target.
    pub total_target_keys: usize,
}

impl ClassificationResult {
    /// Create an empty classification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of source leaves that are translated.
    pub fn translated_count(&self) -> usize {
        self.total_source_keys - self.untranslated.len()
    }

    /// Translated share of the source leaves, in percent.
    pub fn completion_percentage(&self) -> f64 {
        completion_percentage(self.translated_count(), self.total_source_keys)
    }

    /// Returns `true` if every source leaf is translated.
    pub fn is_fully_translated(&self) -> bool {
        self.untranslated.is_empty()
    }

    /// Returns `true` if nothing was found in any category.
    pub fn is_empty(&self) -> bool {
        self.untranslated.is_empty()
            && self.removed.is_empty()
            && self.new.is_empty()
            && self.changed.is_empty()
    }
}

/// Classify every leaf of `source` and `target`.
pub fn classify(source: &Tree, target: &Tree) -> ClassificationResult {
    classify_flat(&flatten(source), &flatten(target))
}

/// Classify two already flattened trees.
pub fn classify_flat(source: &FlatTree, target: &FlatTree) -> ClassificationResult {
    let mut result = ClassificationResult {
        total_source_keys: source.len(),
        total_target_keys: target.len(),
        ..Default::default()
    };

    // Source side: untranslated, removed, changed.
    for (path, source_value) in source {
        let target_value = target.get(path);
        if !is_translated(target_value) {
            result.untranslated.push(path.clone());
        }
        match target_value {
            Some(target_value) => {
                if source_value != target_value {
                    result.changed.push(path.clone());
                }
            }
            None => result.removed.push(path.clone()),
        }
    }

    // Target side: new.
    for path in target.keys() {
        if !source.contains_key(path) {
            result.new.push(path.clone());
        }
    }

    tracing::debug!(
        source = result.total_source_keys,
        target = result.total_target_keys,
        untranslated = result.untranslated.len(),
        removed = result.removed.len(),
        new = result.new.len(),
        changed = result.changed.len(),
        "classified translation keys"
    );

    result
}

/// `translated / total * 100`, rounded to two decimals; `0.0` when `total` is zero.
pub fn completion_percentage(translated: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percentage = translated as f64 / total as f64 * 100.0;
    (percentage * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn tree(value: Value) -> Tree {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn paths(keys: &[KeyPath]) -> Vec<&str> {
        keys.iter().map(KeyPath::as_str).collect()
    }

    #[test]
    fn full_match_with_different_values() {
        let result = classify(
            &tree(json!({"A": "x", "B": {"C": "y"}})),
            &tree(json!({"A": "1", "B": {"C": "2"}})),
        );
        assert!(result.untranslated.is_empty());
        assert!(result.removed.is_empty());
        assert!(result.new.is_empty());
        assert_eq!(paths(&result.changed), vec!["A", "B.C"]);
        assert_eq!(result.total_source_keys, 2);
        assert_eq!(result.total_target_keys, 2);
        assert_eq!(result.completion_percentage(), 100.0);
    }

    #[test]
    fn missing_and_empty_are_untranslated() {
        let result = classify(&tree(json!({"A": "x", "B": "y"})), &tree(json!({"A": ""})));
        assert_eq!(paths(&result.untranslated), vec!["A", "B"]);
        assert_eq!(paths(&result.removed), vec!["B"]);
        assert!(result.new.is_empty());
        // "x" -> "" is still a value change.
        assert_eq!(paths(&result.changed), vec!["A"]);
        assert_eq!(result.completion_percentage(), 0.0);
    }

    #[test]
    fn new_key_added_in_target() {
        let result = classify(&tree(json!({"A": "x"})), &tree(json!({"A": "y", "C": "z"})));
        assert_eq!(paths(&result.new), vec!["C"]);
        assert_eq!(paths(&result.changed), vec!["A"]);
        assert!(result.untranslated.is_empty());
        assert!(result.removed.is_empty());
    }

    #[test]
    fn nested_equal_trees() {
        let t = tree(json!({"N": {"K": "v"}}));
        let result = classify(&t, &t);
        assert!(result.is_empty());
        assert_eq!(result.completion_percentage(), 100.0);
    }

    #[test]
    fn null_target_value_is_untranslated_but_not_removed() {
        let result = classify(&tree(json!({"A": "x"})), &tree(json!({"A": null})));
        assert_eq!(paths(&result.untranslated), vec!["A"]);
        assert!(result.removed.is_empty());
        assert_eq!(paths(&result.changed), vec!["A"]);
    }

    #[test]
    fn falsy_non_string_values_are_translated() {
        let result = classify(
            &tree(json!({"count": "zero", "flag": "no"})),
            &tree(json!({"count": 0, "flag": false})),
        );
        assert!(result.untranslated.is_empty());
        assert_eq!(result.translated_count(), 2);
    }

    #[test]
    fn change_detection_is_type_sensitive() {
        let result = classify(&tree(json!({"n": "1"})), &tree(json!({"n": 1})));
        assert_eq!(paths(&result.changed), vec!["n"]);
    }

    #[test]
    fn subtree_replaced_by_leaf() {
        let result = classify(
            &tree(json!({"menu": {"file": "File", "edit": "Edit"}})),
            &tree(json!({"menu": "Menü"})),
        );
        assert_eq!(paths(&result.removed), vec!["menu.file", "menu.edit"]);
        assert_eq!(paths(&result.new), vec!["menu"]);
    }

    #[test]
    fn empty_trees_give_empty_result() {
        let result = classify(&Tree::new(), &Tree::new());
        assert_eq!(result, ClassificationResult::new());
        assert_eq!(result.completion_percentage(), 0.0);
    }

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(completion_percentage(2, 3), 66.67);
        assert_eq!(completion_percentage(1, 3), 33.33);
        assert_eq!(completion_percentage(0, 0), 0.0);
        assert_eq!(completion_percentage(5, 5), 100.0);
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            Just(json!("")),
            any::<bool>().prop_map(Value::Bool),
            (0i64..3).prop_map(Value::from),
            "[xy]{1,2}".prop_map(Value::String),
        ];
        leaf.prop_recursive(2, 16, 3, |inner| {
            prop::collection::vec(("[a-c]", inner), 0..3)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect()))
        })
    }

    fn arb_tree() -> impl Strategy<Value = Tree> {
        prop::collection::vec(("[a-c]", arb_value()), 0..5)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        #[test]
        fn removed_is_subset_of_untranslated(s in arb_tree(), t in arb_tree()) {
            let result = classify(&s, &t);
            for path in &result.removed {
                prop_assert!(result.untranslated.contains(path));
            }
        }

        #[test]
        fn every_source_leaf_is_translated_or_not(s in arb_tree(), t in arb_tree()) {
            let source = flatten(&s);
            let target = flatten(&t);
            let result = classify_flat(&source, &target);
            for (path, _) in &source {
                let untranslated = result.untranslated.contains(path);
                prop_assert_ne!(untranslated, is_translated(target.get(path)));
            }
            prop_assert_eq!(result.translated_count() + result.untranslated.len(), source.len());
        }

        #[test]
        fn new_and_removed_never_overlap(s in arb_tree(), t in arb_tree()) {
            let result = classify(&s, &t);
            for path in &result.new {
                prop_assert!(!result.removed.contains(path));
            }
        }

        #[test]
        fn changed_paths_exist_on_both_sides(s in arb_tree(), t in arb_tree()) {
            let source = flatten(&s);
            let target = flatten(&t);
            let result = classify_flat(&source, &target);
            for path in &result.changed {
                prop_assert!(source.contains_key(path) && target.contains_key(path));
            }
        }

        #[test]
        fn percentage_is_bounded(s in arb_tree(), t in arb_tree()) {
            let result = classify(&s, &t);
            let pct = result.completion_percentage();
            prop_assert!((0.0..=100.0).contains(&pct));
            if result.total_source_keys == 0 {
                prop_assert_eq!(pct, 0.0);
            }
        }
    }
}
