//! By-name search through a tree.
//!
//! Finds the first member whose name equals a key, depth-first in document
//! order, descending into objects and arrays. The count of visited members
//! is carried through the recursion by return value; no state outlives a call.

use serde_json::Value;

use crate::tree::Tree;

/// A member located by [`find_value`].
#[derive(Clone, Debug, PartialEq)]
pub struct KeyMatch<'a> {
    /// The member's value.
    pub value: &'a Value,
    /// Where it was found, e.g. `menu.items[2].label`.
    pub path: String,
    /// Members and array elements visited up to and including the match.
    pub visited: usize,
}

enum Search<'a> {
    Found(KeyMatch<'a>),
    NotFound { visited: usize },
}

/// Find the first member named `key` anywhere in `tree`.
pub fn find_value<'a>(tree: &'a Tree, key: &str) -> Option<KeyMatch<'a>> {
    match search_object(tree, key, "", 0) {
        Search::Found(found) => Some(found),
        Search::NotFound { .. } => None,
    }
}

fn search_value<'a>(value: &'a Value, key: &str, path: &str, visited: usize) -> Search<'a> {
    match value {
        Value::Object(map) => search_object(map, key, path, visited),
        Value::Array(items) => search_array(items, key, path, visited),
        _ => Search::NotFound { visited },
    }
}

fn search_object<'a>(map: &'a Tree, key: &str, path: &str, mut visited: usize) -> Search<'a> {
    for (name, value) in map {
        visited += 1;
        let member_path = if path.is_empty() {
            name.clone()
        } else {
            format!("{path}.{name}")
        };

        if name == key {
            return Search::Found(KeyMatch {
                value,
                path: member_path,
                visited,
            });
        }

        match search_value(value, key, &member_path, visited) {
            Search::Found(found) => return Search::Found(found),
            Search::NotFound { visited: after } => visited = after,
        }
    }
    Search::NotFound { visited }
}

fn search_array<'a>(items: &'a [Value], key: &str, path: &str, mut visited: usize) -> Search<'a> {
    for (index, item) in items.iter().enumerate() {
        visited += 1;
        match search_value(item, key, &format!("{path}[{index}]"), visited) {
            Search::Found(found) => return Search::Found(found),
            Search::NotFound { visited: after } => visited = after,
        }
    }
    Search::NotFound { visited }
}
