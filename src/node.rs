//! The node representation and the algorithms that search and reshape chains of nodes.
//!
//! A [`Link`] is the slot a node lives in: the tree's root or one of a node's two child
//! positions. An empty slot is simply `None`, so there is no placeholder node anywhere in the
//! structure.

use std::cmp::Ordering;

/// An owned, possibly empty subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A key, the value associated with it, and exclusive ownership of up to two subtrees.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Construct a new leaf `Node` with the given `key` and `value`.
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// Finds the node holding `key` in the subtree rooted at `link`, if any.
pub(crate) fn locate<'a, K, V>(mut link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>>
where
    K: Ord,
{
    while let Some(node) = link.as_deref() {
        link = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Equal => return Some(node),
            Ordering::Greater => &node.right,
        };
    }
    None
}

/// Walks from `slot` following the ordering of `key` and returns the slot where the search
/// ended. The returned slot is occupied if a node holds `key`, otherwise it is the empty slot a
/// new node with `key` would be attached at.
pub(crate) fn locate_mut<'a, K, V>(mut slot: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
where
    K: Ord,
{
    while let Some(ordering) = slot.as_ref().map(|node| key.cmp(&node.key)) {
        slot = match (ordering, slot) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
    slot
}

/// Returns the slot holding the largest key of the subtree in `slot`: the slot reached by
/// following right children for as long as there are any.
fn rightmost<K, V>(mut slot: &mut Link<K, V>) -> &mut Link<K, V> {
    while slot.as_ref().is_some_and(|node| node.right.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.right;
        }
    }
    slot
}

/// Removes the node occupying `slot` and returns its key and value, or `None` if the slot is
/// empty.
///
/// - A leaf simply leaves the slot empty.
/// - A node with one child is replaced by that child (and its subtrees).
/// - A node with two children is replaced by a new node carrying its in-order predecessor's key
///   and value along with the original children, minus the predecessor. The predecessor is the
///   rightmost node of the left subtree so it has no right child and removing it never comes
///   back to this case.
pub(crate) fn remove_at<K, V>(slot: &mut Link<K, V>) -> Option<(K, V)> {
    let Node {
        key,
        value,
        left,
        right,
    } = *slot.take()?;

    match (left, right) {
        (None, None) => {}
        (Some(child), None) | (None, Some(child)) => *slot = Some(child),
        (Some(left), Some(right)) => {
            let mut left = Some(left);
            let Some((predecessor_key, predecessor_value)) = remove_at(rightmost(&mut left)) else {
                unreachable!("A non-empty left subtree always has a rightmost node.");
            };
            *slot = Some(Box::new(Node {
                key: predecessor_key,
                value: predecessor_value,
                left,
                right: Some(right),
            }));
        }
    }

    Some((key, value))
}
