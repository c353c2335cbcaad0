//! The four walks over a tree. Each takes the root link and a projection applied to every node
//! as it is visited, and collects the projections in visiting order. Empty slots are skipped so
//! nothing is ever produced for a missing child.
//!
//! All walks keep their pending nodes in an explicit queue or stack so a degenerate tree (e.g.
//! one built from sorted keys) can be walked without recursing once per level.

use std::collections::VecDeque;

use crate::node::{Link, Node};

/// Breadth-first: each level from left to right, shallowest level first.
pub(crate) fn level_order<'a, K, V, T>(
    root: &'a Link<K, V>,
    mut visit: impl FnMut(&'a Node<K, V>) -> T,
) -> Vec<T> {
    let mut out = Vec::new();
    let mut queue: VecDeque<&Node<K, V>> = root.as_deref().into_iter().collect();

    while let Some(node) = queue.pop_front() {
        out.push(visit(node));
        queue.extend(node.left.as_deref());
        queue.extend(node.right.as_deref());
    }
    out
}

/// Node, then its left subtree, then its right subtree.
pub(crate) fn pre_order<'a, K, V, T>(
    root: &'a Link<K, V>,
    mut visit: impl FnMut(&'a Node<K, V>) -> T,
) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack: Vec<&Node<K, V>> = root.as_deref().into_iter().collect();

    while let Some(node) = stack.pop() {
        out.push(visit(node));
        // Right goes on first so the left subtree is popped, and so emitted, before it.
        stack.extend(node.right.as_deref());
        stack.extend(node.left.as_deref());
    }
    out
}

/// Left subtree, then the node, then its right subtree. For a valid tree this visits keys in
/// ascending order.
pub(crate) fn in_order<'a, K, V, T>(
    root: &'a Link<K, V>,
    mut visit: impl FnMut(&'a Node<K, V>) -> T,
) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut current = root.as_deref();

    loop {
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        let Some(node) = stack.pop() else {
            break;
        };
        out.push(visit(node));
        current = node.right.as_deref();
    }
    out
}

/// Left subtree, then right subtree, then the node.
pub(crate) fn post_order<'a, K, V, T>(
    root: &'a Link<K, V>,
    visit: impl FnMut(&'a Node<K, V>) -> T,
) -> Vec<T> {
    // Walking node, right, left and reversing gives left, right, node.
    let mut reversed = Vec::new();
    let mut stack: Vec<&Node<K, V>> = root.as_deref().into_iter().collect();

    while let Some(node) = stack.pop() {
        reversed.push(node);
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    reversed.into_iter().rev().map(visit).collect()
}
