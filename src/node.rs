//! Node implementation for the trie.
//!
//! This module contains the `Node` structure that forms the backbone of the
//! trie. Each node exclusively owns its children, so dropping the root releases
//! the whole tree.
//!
//! Trees are as deep as their longest key, so every whole-tree walk here
//! (drop, clone, comparison, counting, key collection) uses an explicit stack
//! rather than recursion.

use std::collections::{btree_map, BTreeMap};
use std::fmt;

/// A single vertex in the trie.
///
/// Children are keyed by the character on the edge leading to them and kept in
/// a `BTreeMap`, so traversals visit them in character order. A node holding a
/// value is the terminus of a stored key; a node without one is only a path node.
pub struct Node<V> {
    /// Child nodes indexed by their edge character
    pub(crate) children: BTreeMap<char, Node<V>>,

    /// The value stored at this node, if any
    pub(crate) value: Option<V>,
}

impl<V> Node<V> {
    /// Creates a new path node with no value and no children
    pub fn new() -> Self {
        Node {
            children: BTreeMap::new(),
            value: None,
        }
    }

    /// Creates a new leaf node holding the given value
    pub fn with_value(value: V) -> Self {
        Node {
            children: BTreeMap::new(),
            value: Some(value),
        }
    }

    /// The value stored at this node, if any
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// The outgoing edges of this node, in character order
    pub fn children(&self) -> &BTreeMap<char, Node<V>> {
        &self.children
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node is a leaf without a value.
    ///
    /// Dead nodes never survive a deletion anywhere below the root.
    pub fn is_dead(&self) -> bool {
        self.is_leaf() && self.value.is_none()
    }

    /// Returns the number of values stored in this subtree
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.value.is_some() {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Returns the number of nodes in this subtree, this one included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }

        count
    }

    /// Follows `path` one character at a time, returning the node it ends on.
    pub fn descend(&self, path: &str) -> Option<&Node<V>> {
        let mut current = self;
        for c in path.chars() {
            current = current.children.get(&c)?;
        }
        Some(current)
    }

    pub(crate) fn descend_mut(&mut self, path: &str) -> Option<&mut Node<V>> {
        let mut current = self;
        for c in path.chars() {
            current = current.children.get_mut(&c)?;
        }
        Some(current)
    }

    /// Appends every key stored at or below this node to `out`.
    ///
    /// `path` holds the characters leading to this node and serves as the walk's
    /// shared buffer. It is unchanged when this returns.
    pub(crate) fn collect_keys(&self, path: &mut String, out: &mut Vec<String>) {
        let mut walk = Walk::new(self, std::mem::take(path));

        while walk.advance().is_some() {
            out.push(walk.path().to_string());
        }

        *path = walk.into_path();
    }
}

impl<V> Default for Node<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for Node<V> {
    fn drop(&mut self) {
        let mut stack: Vec<Node<V>> = Vec::new();
        stack.extend(std::mem::take(&mut self.children).into_values());

        // Each node is emptied before it goes out of scope, so no drop nests.
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl<V: Clone> Node<V> {
    fn shallow_clone(&self) -> Self {
        Node {
            children: BTreeMap::new(),
            value: self.value.clone(),
        }
    }
}

impl<V: Clone> Clone for Node<V> {
    fn clone(&self) -> Self {
        // Frames hold the edge into the node, its unvisited source children and
        // the copy being built. A finished copy is attached to the frame below.
        let mut frames: Vec<(Option<char>, btree_map::Iter<'_, char, Node<V>>, Node<V>)> =
            vec![(None, self.children.iter(), self.shallow_clone())];

        while let Some(top) = frames.last_mut() {
            match top.1.next() {
                Some((&c, child)) => {
                    frames.push((Some(c), child.children.iter(), child.shallow_clone()));
                }
                None => {
                    let (edge, _, copy) = match frames.pop() {
                        Some(frame) => frame,
                        None => break,
                    };
                    match (edge, frames.last_mut()) {
                        (Some(c), Some(parent)) => {
                            parent.2.children.insert(c, copy);
                        }
                        _ => return copy,
                    }
                }
            }
        }

        Node::new()
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];

        while let Some((a, b)) = stack.pop() {
            if a.value != b.value || a.children.len() != b.children.len() {
                return false;
            }
            for ((ca, na), (cb, nb)) in a.children.iter().zip(b.children.iter()) {
                if ca != cb {
                    return false;
                }
                stack.push((na, nb));
            }
        }

        true
    }
}

impl<V: Eq> Eq for Node<V> {}

impl<V: fmt::Debug> fmt::Debug for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("edges", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Depth-first walk over the valued nodes below a starting node.
///
/// A single path buffer is shared by the whole walk: each stack entry records
/// the buffer length of its parent and the edge character to append, so the
/// buffer is truncated and extended in place instead of copied per node.
pub(crate) struct Walk<'a, V> {
    stack: Vec<(&'a Node<V>, usize, Option<char>)>,
    path: String,
    base: usize,
}

impl<'a, V> Walk<'a, V> {
    pub(crate) fn new(start: &'a Node<V>, path: String) -> Self {
        let base = path.len();
        Walk {
            stack: vec![(start, base, None)],
            path,
            base,
        }
    }

    pub(crate) fn empty() -> Self {
        Walk {
            stack: Vec::new(),
            path: String::new(),
            base: 0,
        }
    }

    /// The full key of the node last returned by [`advance`](Walk::advance)
    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    /// Moves to the next valued node, in character order, and returns its value.
    pub(crate) fn advance(&mut self) -> Option<&'a V> {
        while let Some((node, parent_len, edge)) = self.stack.pop() {
            self.path.truncate(parent_len);
            if let Some(c) = edge {
                self.path.push(c);
            }

            // Reverse push so the smallest character is popped first
            let len = self.path.len();
            for (&c, child) in node.children.iter().rev() {
                self.stack.push((child, len, Some(c)));
            }

            if let Some(value) = &node.value {
                return Some(value);
            }
        }

        None
    }

    /// Returns the buffer with the starting path restored.
    pub(crate) fn into_path(mut self) -> String {
        self.path.truncate(self.base);
        self.path
    }
}
