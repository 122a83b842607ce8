//! Nested translation trees and their flattened form.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::key_path::KeyPath;

/// A nested mapping from keys to leaves or further trees.
///
/// Member order follows the source document.
pub type Tree = Map<String, Value>;

/// Any non-mapping value. Arrays are leaves and are never descended into.
pub type LeafValue = Value;

/// Leaves of a tree keyed by their full path, in document order.
pub type FlatTree = IndexMap<KeyPath, LeafValue>;

/// Flatten a tree into one entry per leaf.
///
/// Subtrees are never emitted themselves, so an empty subtree contributes
/// nothing. If two members flatten to the same path (a key containing a dot
/// next to a nested key) the later value wins and keeps the earlier position.
pub fn flatten(tree: &Tree) -> FlatTree {
    let mut flat = FlatTree::new();
    flatten_into(tree, None, &mut flat);
    flat
}

fn flatten_into(tree: &Tree, prefix: Option<&KeyPath>, flat: &mut FlatTree) {
    for (key, value) in tree {
        let path = match prefix {
            Some(parent) => parent.child(key),
            None => KeyPath::root(key),
        };
        match value {
            Value::Object(subtree) => flatten_into(subtree, Some(&path), flat),
            leaf => {
                flat.insert(path, leaf.clone());
            }
        }
    }
}

/// Whether a target-side value counts as a translation.
///
/// Only an absent value, `null` and the empty string are untranslated.
/// `0`, `false`, empty arrays and text identical to the source all count
/// as translated.
pub fn is_translated(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(_) => true,
    }
}

/// Display form of a leaf: strings verbatim, everything else as JSON.
pub fn leaf_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn tree(value: Value) -> Tree {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn flatten_emits_leaves_at_full_depth() {
        let flat = flatten(&tree(json!({"A": "x", "B": {"C": "y", "D": {"E": 1}}})));
        let keys: Vec<_> = flat.keys().map(KeyPath::as_str).collect();
        assert_eq!(keys, vec!["A", "B.C", "B.D.E"]);
        assert_eq!(flat["B.C"], json!("y"));
        assert_eq!(flat["B.D.E"], json!(1));
    }

    #[test]
    fn flatten_keeps_document_order() {
        let flat = flatten(&tree(json!({"zeta": "1", "alpha": "2", "mid": {"b": "3", "a": "4"}})));
        let keys: Vec<_> = flat.keys().map(KeyPath::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid.b", "mid.a"]);
    }

    #[test]
    fn flatten_treats_arrays_as_leaves() {
        let flat = flatten(&tree(json!({"list": ["a", {"b": "c"}]})));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat["list"], json!(["a", {"b": "c"}]));
    }

    #[test]
    fn flatten_skips_empty_subtrees() {
        let flat = flatten(&tree(json!({"empty": {}, "k": "v"})));
        assert_eq!(flat.len(), 1);
        assert!(flat.contains_key("k"));
    }

    #[test]
    fn flatten_empty_tree() {
        assert!(flatten(&Tree::new()).is_empty());
    }

    #[test]
    fn translated_predicate() {
        assert!(!is_translated(None));
        assert!(!is_translated(Some(&json!(null))));
        assert!(!is_translated(Some(&json!(""))));
        assert!(is_translated(Some(&json!(" "))));
        assert!(is_translated(Some(&json!("Merhaba"))));
        assert!(is_translated(Some(&json!(0))));
        assert!(is_translated(Some(&json!(false))));
        assert!(is_translated(Some(&json!([]))));
    }

    #[test]
    fn leaf_text_forms() {
        assert_eq!(leaf_text(&json!("plain")), "plain");
        assert_eq!(leaf_text(&json!(1)), "1");
        assert_eq!(leaf_text(&json!(true)), "true");
        assert_eq!(leaf_text(&json!(null)), "null");
        assert_eq!(leaf_text(&json!(["a"])), "[\"a\"]");
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-z ]{0,6}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop::collection::vec(("[a-d]{1,2}", inner), 0..4)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect()))
        })
    }

    fn arb_tree() -> impl Strategy<Value = Tree> {
        prop::collection::vec(("[a-d]{1,2}", arb_value()), 0..6)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        #[test]
        fn flatten_is_idempotent(t in arb_tree()) {
            prop_assert_eq!(flatten(&t), flatten(&t));
        }

        #[test]
        fn flatten_never_emits_objects(t in arb_tree()) {
            prop_assert!(flatten(&t).values().all(|v| !v.is_object()));
        }
    }
}
