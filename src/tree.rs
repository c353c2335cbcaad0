//! The public face of the crate: an owned, unbalanced Binary Search Tree mapping keys to values.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.get(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.get(&1), Some(&2));
//!
//! // Inserting a new value for the same key overwrites the value.
//! tree.insert(1, 3);
//! assert_eq!(tree.get(&1), Some(&3));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a node returns its value.
//! assert_eq!(tree.remove(&1), Some(3));
//! assert_eq!(tree.get(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::fmt;
use std::mem;

use crate::node::{self, Link, Node};
use crate::traverse;

/// An ordered key/value store backed by a Binary Search Tree that is never rebalanced. The shape
/// of the tree is decided entirely by the order keys are inserted and removed in.
///
/// Keys are unique: inserting an existing key replaces its value. Removing a node with two
/// children promotes its in-order predecessor (the largest key of its left subtree) into its
/// place.
pub struct OrderedTree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for OrderedTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for OrderedTree<K, V> {
    fn drop(&mut self) {
        // Detach children before each node is dropped so a long chain doesn't drop recursively.
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K, V> Clone for OrderedTree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        // In post-order both subtrees of a node are built before the node itself, with the right
        // one on top of the stack.
        let mut built: Vec<Box<Node<K, V>>> = Vec::new();
        for node in traverse::post_order(&self.root, |node| node) {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node {
                key: node.key.clone(),
                value: node.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

/// A node shown with the keys of its children, for the alternate `Debug` form.
struct NodeShape<'a, K, V>(&'a Node<K, V>);

impl<K, V> fmt::Debug for NodeShape<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0;
        f.debug_struct("Node")
            .field("key", &node.key)
            .field("value", &node.value)
            .field("left", &node.left.as_ref().map(|left| &left.key))
            .field("right", &node.right.as_ref().map(|right| &right.key))
            .finish()
    }
}

/// `{:?}` shows the entries as an ordered map. `{:#?}` shows the shape of the tree instead: every
/// node in level order along with the keys of its children.
impl<K, V> fmt::Debug for OrderedTree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(traverse::level_order(&self.root, NodeShape))
                .finish()
        } else {
            f.debug_map()
                .entries(traverse::in_order(&self.root, |node| (&node.key, &node.value)))
                .finish()
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedTree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for OrderedTree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> OrderedTree<K, V> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert("a", 1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes, i.e. distinct keys, in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes every node from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has the
    /// corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.get(&1), Some(&2));
    /// assert_eq!(tree.get(&42), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        node::locate(&self.root, key).map(|node| &node.value)
    }

    /// Like [`get`][Self::get] but the value can be modified in place.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        node::locate_mut(&mut self.root, key)
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    /// Returns `true` if a node in the tree holds `key`.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        node::locate(&self.root, key).is_some()
    }

    /// Inserts the given value into the tree stored at the given key. Inserting a new value for an
    /// existing key overwrites its value and returns the old one; the tree's shape is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(tree.insert(1, 2), None);
    /// assert_eq!(tree.get(&1), Some(&2));
    ///
    /// assert_eq!(tree.insert(1, 3), Some(2));
    /// assert_eq!(tree.get(&1), Some(&3));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        let slot = node::locate_mut(&mut self.root, &key);
        let displaced = match slot {
            Some(node) => Some(mem::replace(&mut node.value, value)),
            None => {
                *slot = Some(Node::new_boxed(key, value));
                self.len += 1;
                None
            }
        };

        self.check_len();
        displaced
    }

    /// Removes the node containing the given key from the tree and returns its value. If the tree
    /// does not contain a node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.remove(&1), Some(2));
    /// assert_eq!(tree.get(&1), None);
    ///
    /// // Removing a missing key is a no-op.
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let (_, value) = node::remove_at(node::locate_mut(&mut self.root, key))?;
        self.len -= 1;

        self.check_len();
        Some(value)
    }

    /// Values in breadth-first order: the root, then each following level from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_, _> = [5, 3, 7, 2, 4].into_iter().map(|k| (k, k)).collect();
    /// assert_eq!(tree.level_order_traversal(), [&5, &3, &7, &2, &4]);
    /// ```
    pub fn level_order_traversal(&self) -> Vec<&V> {
        traverse::level_order(&self.root, |node| &node.value)
    }

    /// Values with every node visited before its left subtree, then its right subtree.
    pub fn pre_order_traversal(&self) -> Vec<&V> {
        traverse::pre_order(&self.root, |node| &node.value)
    }

    /// Values in ascending order of their keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_, _> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    /// assert_eq!(tree.in_order_traversal(), [&'a', &'b', &'c']);
    /// ```
    pub fn in_order_traversal(&self) -> Vec<&V> {
        traverse::in_order(&self.root, |node| &node.value)
    }

    /// Values with every node visited after both of its subtrees, left first.
    pub fn post_order_traversal(&self) -> Vec<&V> {
        traverse::post_order(&self.root, |node| &node.value)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Vec<&K> {
        traverse::in_order(&self.root, |node| &node.key)
    }

    fn check_len(&self) {
        if cfg!(debug_assertions) {
            assert_eq!(self.root.is_none(), self.len == 0);
        }
    }
}
