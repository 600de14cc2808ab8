//! Prefix view into a trie.
//!
//! This module provides the `PrefixView` type, which allows for lookup,
//! enumeration and comparison of the subtrie below a key prefix.

use std::fmt;

use crate::node::Node;
use crate::trie::Iter;
use crate::Trie;

/// A borrowed view into the subtrie defined by a key prefix.
///
/// Keys seen through the view are always full keys of the underlying trie.
/// Two views are equal when their subtries have the same shape and values,
/// regardless of which trie or prefix they came from.
///
/// # Examples
///
/// ```
/// use string_trie::Trie;
///
/// let mut trie1 = Trie::new();
/// trie1.insert("hello", 1).unwrap();
/// trie1.insert("help", 2).unwrap();
///
/// let mut trie2 = Trie::new();
/// trie2.insert("hello", 1).unwrap();
/// trie2.insert("help", 2).unwrap();
/// trie2.insert("world", 3).unwrap();
///
/// let view1 = trie1.view_subtrie("hel");
/// let view2 = trie2.view_subtrie("hel");
///
/// assert_eq!(view1, view2);
/// assert!(view1.contains_key("hello"));
/// assert!(!view2.contains_key("world"));
/// ```
#[derive(Clone)]
pub struct PrefixView<'a, V> {
    /// The source trie for this view
    trie: &'a Trie<V>,

    /// The key prefix defining this view
    prefix: String,

    /// The subtrie node at the prefix, if it exists
    subtrie_node: Option<&'a Node<V>>,
}

/// An iterator over the entries of a PrefixView.
///
/// Yields full keys with references to their values, in character order.
pub struct PrefixViewIter<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> PrefixView<'a, V> {
    /// Creates a new prefix view for the given trie and prefix.
    pub fn new(trie: &'a Trie<V>, prefix: &str) -> Self {
        PrefixView {
            trie,
            prefix: prefix.to_string(),
            subtrie_node: trie.root.descend(prefix),
        }
    }

    /// Returns the key prefix for this view.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &'a Trie<V> {
        self.trie
    }

    /// Returns whether the prefix path exists in the trie.
    ///
    /// The prefix itself does not have to be a stored key.
    pub fn exists(&self) -> bool {
        self.subtrie_node.is_some()
    }

    /// Returns the number of keys at or below the prefix.
    pub fn len(&self) -> usize {
        self.subtrie_node.map_or(0, Node::subtree_size)
    }

    /// Returns whether this view contains no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks if the view contains a key.
    ///
    /// Only returns true if the key starts with the prefix and is stored in the trie.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Gets the value for a key if it exists in this prefix view.
    pub fn get(&self, key: &str) -> Option<&'a V> {
        let suffix = key.strip_prefix(self.prefix.as_str())?;
        if key.is_empty() {
            return None;
        }

        self.subtrie_node?.descend(suffix).and_then(Node::value)
    }

    /// Returns every key in the view, in character order.
    pub fn keys(&self) -> Vec<String> {
        let mut result = Vec::new();

        if let Some(node) = self.subtrie_node {
            let mut path = self.prefix.clone();
            node.collect_keys(&mut path, &mut result);
        }

        result
    }

    /// Returns an iterator over the key-value pairs in the prefix view.
    pub fn iter(&self) -> PrefixViewIter<'a, V> {
        let inner = match self.subtrie_node {
            Some(node) => Iter::new(node, self.prefix.clone()),
            None => Iter::empty(),
        };

        PrefixViewIter { inner }
    }
}

impl<'a, V> fmt::Debug for PrefixView<'a, V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixView")
            .field("prefix", &self.prefix)
            .field("exists", &self.exists())
            .field("entries", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, V> PartialEq for PrefixView<'a, V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self.subtrie_node, other.subtrie_node) {
            (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, V> Eq for PrefixView<'a, V> where V: Eq {}

impl<'a, 'b, V> IntoIterator for &'b PrefixView<'a, V> {
    type Item = (String, &'a V);
    type IntoIter = PrefixViewIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> Iterator for PrefixViewIter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_trie() -> Trie<i32> {
        let mut trie = Trie::new();
        trie.insert("hello", 1).unwrap();
        trie.insert("help", 2).unwrap();
        trie.insert("world", 3).unwrap();
        trie
    }

    #[test]
    fn test_prefix_view_creation() {
        let trie = create_test_trie();
        let view = trie.view_subtrie("hel");

        assert_eq!(view.prefix(), "hel");
        assert!(std::ptr::eq(view.trie(), &trie));
        assert!(view.exists());
    }

    #[test]
    fn test_prefix_view_exists() {
        let trie = create_test_trie();

        assert!(trie.view_subtrie("h").exists());
        assert!(trie.view_subtrie("hello").exists());
        assert!(!trie.view_subtrie("help!").exists());
        assert!(!trie.view_subtrie("x").exists());
    }

    #[test]
    fn test_prefix_view_len() {
        let trie = create_test_trie();

        assert_eq!(trie.view_subtrie("").len(), 3);
        assert_eq!(trie.view_subtrie("hel").len(), 2);
        assert_eq!(trie.view_subtrie("hello").len(), 1);
        assert_eq!(trie.view_subtrie("x").len(), 0);
        assert!(trie.view_subtrie("x").is_empty());
    }

    #[test]
    fn test_prefix_view_get() {
        let trie = create_test_trie();
        let view = trie.view_subtrie("hel");

        assert_eq!(view.get("hello"), Some(&1));
        assert_eq!(view.get("help"), Some(&2));
        assert_eq!(view.get("world"), None);
        assert_eq!(view.get("hel"), None);
        assert_eq!(view.get("he"), None);
    }

    #[test]
    fn test_prefix_view_empty_prefix_and_key() {
        let trie = create_test_trie();
        let view = trie.view_subtrie("");

        assert_eq!(view.get(""), None);
        assert_eq!(view.get("world"), Some(&3));
    }

    #[test]
    fn test_prefix_view_keys() {
        let trie = create_test_trie();

        assert_eq!(trie.view_subtrie("hel").keys(), trie.keys_with_prefix("hel"));
        assert_eq!(trie.view_subtrie("").keys(), trie.keys());
        assert!(trie.view_subtrie("x").keys().is_empty());
    }

    #[test]
    fn test_prefix_view_iter() {
        let trie = create_test_trie();
        let view = trie.view_subtrie("hel");

        let entries: Vec<(String, i32)> = view.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(
            entries,
            vec![("hello".to_string(), 1), ("help".to_string(), 2)]
        );

        assert_eq!(trie.view_subtrie("x").iter().count(), 0);
    }

    #[test]
    fn test_prefix_view_equality() {
        let trie = create_test_trie();

        assert_eq!(trie.view_subtrie("hel"), trie.view_subtrie("hel"));
        assert_ne!(trie.view_subtrie("hel"), trie.view_subtrie("w"));
        assert_eq!(trie.view_subtrie("x"), trie.view_subtrie("y"));
        assert_ne!(trie.view_subtrie("x"), trie.view_subtrie("w"));
    }
}
