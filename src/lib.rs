//! An ordered key/value store backed by an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! associated with that key, and up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` where `height` is the longest path
//! from the root `Node` to a leaf `Node`. This tree does no rebalancing, so its
//! shape depends entirely on insertion order: inserting sorted keys produces a
//! tree whose height equals its size. Because of that every operation here
//! walks the tree with loops and explicit stacks rather than recursion.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//! for key in [5, 3, 7, 2, 4, 6, 8] {
//!     tree.insert(key, key * 10);
//! }
//!
//! assert_eq!(tree.get(&4), Some(&40));
//! assert_eq!(tree.level_order_traversal(), [&50, &30, &70, &20, &40, &60, &80]);
//!
//! // Two children: the in-order predecessor (4) takes 5's place.
//! assert_eq!(tree.remove(&5), Some(50));
//! assert_eq!(tree.pre_order_traversal(), [&40, &30, &20, &70, &60, &80]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
mod traverse;
pub mod tree;

pub use tree::OrderedTree;
