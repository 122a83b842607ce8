//! Foundation types for the translation diff checker.
//!
//! A translation resource is a nested key-value document. This crate defines
//! its in-memory form and the primitives every other crate builds on.
//!
//! # Key Types
//!
//! - [`Tree`] -- Ordered nested mapping from keys to leaves or further trees
//! - [`KeyPath`] -- Dot-joined location of a leaf (`"NESTED.KEY1"`)
//! - [`FlatTree`] -- Ordered `KeyPath -> LeafValue` mapping produced by [`flatten`]
//! - [`KeyMatch`] -- Result of a pure by-name search through a tree

pub mod key_path;
pub mod lookup;
pub mod tree;

pub use key_path::KeyPath;
pub use lookup::{find_value, KeyMatch};
pub use tree::{flatten, is_translated, leaf_text, FlatTree, LeafValue, Tree};
