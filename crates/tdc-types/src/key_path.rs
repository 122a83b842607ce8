use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between key segments.
pub const SEPARATOR: char = '.';

/// Dot-joined location of an entry within a [`Tree`](crate::Tree).
///
/// Paths are built the same way for every tree, so the same logical key
/// yields the same path in a source and a target resource. Keys that
/// themselves contain a dot are not escaped.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(String);

impl KeyPath {
    /// A path made of a single top-level key.
    pub fn root(key: &str) -> Self {
        Self(key.to_owned())
    }

    /// Extend this path by one key.
    pub fn child(&self, key: &str) -> Self {
        let mut path = String::with_capacity(self.0.len() + 1 + key.len());
        path.push_str(&self.0);
        path.push(SEPARATOR);
        path.push_str(key);
        Self(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The individual keys, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// The first segment.
    pub fn top_level(&self) -> &str {
        self.segments().next().unwrap_or_default()
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Returns `true` if this path is `prefix` itself or lies beneath it.
    pub fn starts_with(&self, prefix: &KeyPath) -> bool {
        match self.0.strip_prefix(prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
            None => false,
        }
    }
}

impl Borrow<str> for KeyPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self(path.to_owned())
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl PartialEq<str> for KeyPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for KeyPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPath({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_joins_with_dot() {
        let path = KeyPath::root("NESTED").child("KEY1");
        assert_eq!(path.as_str(), "NESTED.KEY1");
        assert_eq!(path.to_string(), "NESTED.KEY1");
    }

    #[test]
    fn segments_and_depth() {
        let path = KeyPath::from("a.b.c");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(path.depth(), 3);
        assert_eq!(path.top_level(), "a");
    }

    #[test]
    fn starts_with_respects_segment_boundaries() {
        let prefix = KeyPath::from("menu");
        assert!(KeyPath::from("menu").starts_with(&prefix));
        assert!(KeyPath::from("menu.file").starts_with(&prefix));
        assert!(!KeyPath::from("menubar.file").starts_with(&prefix));
        assert!(!KeyPath::from("me").starts_with(&prefix));
    }

    #[test]
    fn serializes_as_plain_string() {
        let path = KeyPath::from("a.b");
        assert_eq!(serde_json::to_string(&path).unwrap(), "\"a.b\"");
        let back: KeyPath = serde_json::from_str("\"a.b\"").unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn compares_with_str() {
        assert_eq!(KeyPath::from("x"), "x");
    }
}
