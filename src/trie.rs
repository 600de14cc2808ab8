//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for working
//! with the trie data structure.

use std::fmt;

use tracing::{debug, trace};

use crate::node::{Node, Walk};
use crate::prefix_view::PrefixView;
use crate::{Error, Result};

const LOG_TARGET: &str = "string_trie";

/// A prefix tree mapping non-empty string keys to values.
///
/// Keys are split into `char`s, one edge per character. The root stands for the
/// empty prefix and is never a stored key itself.
///
/// The trie is a plain single-owner structure: mutation requires `&mut self`, and
/// sharing it across threads needs an external lock around the whole trie.
#[derive(Clone, PartialEq, Eq)]
pub struct Trie<V> {
    /// The root node of the trie
    pub(crate) root: Node<V>,

    /// The number of values stored in the trie
    size: usize,
}

impl<V> Trie<V> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::Trie;
    ///
    /// let trie = Trie::<i32>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: Node::new(),
            size: 0,
        }
    }

    /// Returns the number of keys stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello", 42).unwrap();
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no keys.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of nodes in the trie, including the root.
    ///
    /// A trie whose keys have all been deleted is back to a single node.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// Missing nodes along the key's path are created. Re-inserting an existing
    /// key overwrites its value and leaves the size unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert_eq!(trie.insert("hello", 1), Ok(None));
    /// assert_eq!(trie.insert("hello", 2), Ok(Some(1)));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, key: &str, value: V) -> Result<Option<V>> {
        check_key(key)?;

        let mut current = &mut self.root;
        for c in key.chars() {
            current = current.children.entry(c).or_default();
        }

        let replaced = current.value.replace(value);
        if replaced.is_none() {
            self.size += 1;
            trace!(target: LOG_TARGET, key = %key, size = self.size, "Inserted new key");
        } else {
            trace!(target: LOG_TARGET, key = %key, "Replaced value of existing key");
        }

        Ok(replaced)
    }

    /// Retrieves the value stored for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is empty and
    /// [`Error::KeyNotFound`] if no value is stored under it.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::{Error, Trie};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.lookup("hello"), Ok(&42));
    /// assert_eq!(trie.lookup("hell"), Err(Error::KeyNotFound("hell".to_string())));
    /// assert_eq!(trie.lookup(""), Err(Error::InvalidKey));
    /// ```
    pub fn lookup(&self, key: &str) -> Result<&V> {
        check_key(key)?;

        self.get(key).ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Retrieves the value stored for `key`, if any.
    ///
    /// Never fails: the empty key simply has no value.
    pub fn get(&self, key: &str) -> Option<&V> {
        if key.is_empty() {
            return None;
        }

        self.root.descend(key).and_then(Node::value)
    }

    /// Retrieves a mutable reference to the value stored for `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        if key.is_empty() {
            return None;
        }

        self.root.descend_mut(key).and_then(|node| node.value.as_mut())
    }

    /// Retrieves the value stored for `key`, or `default` wherever
    /// [`lookup`](Trie::lookup) would fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.get_or_default("hello", &0), &42);
    /// assert_eq!(trie.get_or_default("world", &0), &0);
    /// assert_eq!(trie.get_or_default("", &0), &0);
    /// ```
    pub fn get_or_default<'a>(&'a self, key: &str, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Returns `true` if a value is stored for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key` from the trie, returning its value if it was present.
    ///
    /// Deleting an absent key is a no-op. Nodes left without a value and
    /// without children are pruned back up the path, stopping at the first
    /// node still in use. The root is never removed.
    ///
    /// The descent remembers the deepest node on the path that holds a value or
    /// another branch. If the key's node ends up dead, the whole chain below that
    /// node is detached with a single edge removal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if `key` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello", 42).unwrap();
    ///
    /// assert_eq!(trie.delete("hello"), Ok(Some(42)));
    /// assert_eq!(trie.delete("hello"), Ok(None));
    /// assert!(trie.is_empty());
    /// ```
    pub fn delete(&mut self, key: &str) -> Result<Option<V>> {
        check_key(key)?;

        // Byte offset into `key` of the node that keeps the branch, and the edge
        // below it that starts the chain dying with this key.
        let mut cut = None;
        let mut current = &mut self.root;
        for (idx, c) in key.char_indices() {
            if idx == 0 || current.value.is_some() || current.children.len() > 1 {
                cut = Some((idx, c));
            }
            current = match current.children.get_mut(&c) {
                Some(child) => child,
                None => return Ok(None),
            };
        }

        let removed = match current.value.take() {
            Some(value) => value,
            None => return Ok(None),
        };
        let dead = current.is_leaf();

        self.size -= 1;
        trace!(target: LOG_TARGET, key = %key, size = self.size, "Deleted key");

        if !dead {
            return Ok(Some(removed));
        }

        if let Some((idx, c)) = cut {
            if let Some(keeper) = self.root.descend_mut(&key[..idx]) {
                keeper.children.remove(&c);
                trace!(target: LOG_TARGET, depth = idx, edge = %c, "Pruned dead branch");
            }
        }

        Ok(Some(removed))
    }

    /// Returns every stored key, in character order.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("b", 1).unwrap();
    /// trie.insert("a", 2).unwrap();
    /// trie.insert("ab", 3).unwrap();
    ///
    /// assert_eq!(trie.keys(), vec!["a", "ab", "b"]);
    /// ```
    pub fn keys(&self) -> Vec<String> {
        self.keys_with_prefix("")
    }

    /// Returns every stored key starting with `prefix`, in character order.
    ///
    /// The empty prefix matches every key. A prefix whose path is missing from
    /// the trie matches nothing.
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut result = Vec::new();

        if let Some(node) = self.root.descend(prefix) {
            let mut path = prefix.to_string();
            node.collect_keys(&mut path, &mut result);
        }

        result
    }

    /// Returns the longest prefix of `s` that is a stored key.
    ///
    /// The walk stops at the first character without a matching edge, so `s`
    /// does not need to be consumed entirely. Returns `""` when no prefix of `s`
    /// is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("car", 2).unwrap();
    /// trie.insert("cart", 3).unwrap();
    ///
    /// assert_eq!(trie.longest_prefix_of("cartoon"), "cart");
    /// assert_eq!(trie.longest_prefix_of("carpet"), "car");
    /// assert_eq!(trie.longest_prefix_of("ca"), "");
    /// ```
    pub fn longest_prefix_of<'a>(&self, s: &'a str) -> &'a str {
        let mut current = &self.root;
        let mut longest = 0;

        for (idx, c) in s.char_indices() {
            match current.children.get(&c) {
                Some(child) => current = child,
                None => break,
            }

            if current.value.is_some() {
                longest = idx + c.len_utf8();
            }
        }

        &s[..longest]
    }

    /// Returns an iterator over the stored keys and their values.
    ///
    /// Entries come out in the same order as [`keys`](Trie::keys).
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.root, String::new())
    }

    /// Creates a view of the subtrie below the given prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hello", 1).unwrap();
    /// trie.insert("help", 2).unwrap();
    /// trie.insert("world", 3).unwrap();
    ///
    /// let view = trie.view_subtrie("hel");
    /// assert_eq!(view.len(), 2);
    /// assert_eq!(view.get("help"), Some(&2));
    /// assert_eq!(view.get("world"), None);
    /// ```
    pub fn view_subtrie(&self, prefix: &str) -> PrefixView<'_, V> {
        PrefixView::new(self, prefix)
    }
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Trie<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a Trie<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn check_key(key: &str) -> Result<()> {
    if key.is_empty() {
        debug!(target: LOG_TARGET, "Rejected empty key");
        return Err(Error::InvalidKey);
    }
    Ok(())
}

/// A depth-first iterator over the entries of a trie or subtrie.
///
/// Yields owned keys together with references to their values.
pub struct Iter<'a, V> {
    walk: Walk<'a, V>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(start: &'a Node<V>, path: String) -> Self {
        Iter {
            walk: Walk::new(start, path),
        }
    }

    pub(crate) fn empty() -> Self {
        Iter {
            walk: Walk::empty(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.walk.advance()?;
        Some((self.walk.path().to_string(), value))
    }
}
