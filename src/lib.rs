//! # String Trie
//!
//! A prefix tree mapping non-empty string keys to arbitrary values.
//!
//! Every edge of the tree is labelled by a single `char`, so each path from the
//! root spells a key prefix. Nodes are created lazily on insertion and pruned
//! eagerly on deletion, so the tree never holds a childless node without a value.
//!
//! ## Features
//!
//! - **Map API**: insert, strict lookup, defaulting lookup, idempotent delete
//! - **Prefix Queries**: enumerate every key below a prefix
//! - **Longest Prefix Match**: find the longest stored key that prefixes a string
//! - **Prefix Views**: borrow a subtrie and query it like a map
//!
//! ## Example
//!
//! ```rust
//! use string_trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("cat", 1).unwrap();
//! trie.insert("car", 2).unwrap();
//! trie.insert("cart", 3).unwrap();
//!
//! assert_eq!(trie.lookup("car"), Ok(&2));
//! assert_eq!(trie.keys_with_prefix("ca"), vec!["car", "cart", "cat"]);
//! assert_eq!(trie.longest_prefix_of("cartoon"), "cart");
//! ```

pub mod node;
mod prefix_view;
mod trie;

pub use crate::node::Node;
pub use crate::prefix_view::{PrefixView, PrefixViewIter};
pub use crate::trie::{Iter, Trie};

/// Errors that can occur in trie operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The empty string was passed where a key is required
    #[error("key must be a non-empty string")]
    InvalidKey,
    /// No value is stored under the key
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
