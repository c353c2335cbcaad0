use ordered_tree::OrderedTree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same entries in the map.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut OrderedTree<K, V>, map: &mut BTreeMap<K, V>)
where
    K: Clone + Ord,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                map.remove(k);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut map = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut map);
        map.keys().all(|key| tree.get(key) == map.get(key))
            && tree.in_order_traversal().into_iter().eq(map.values())
            && tree.len() == map.len()
            && tree.is_empty() == map.is_empty()
    }

    fn fuzz_multiple_operations_string(ops: Vec<Op<String, u8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut map = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut map);
        tree.keys().into_iter().eq(map.keys())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }

        xs.iter().all(|x| tree.get(x) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.get(x).is_none())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = OrderedTree::new();
        for x in &xs {
            tree.insert(*x, *x);
        }
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| tree.get(x).is_none())
            && still_present.iter().all(|x| tree.get(x).is_some())
    }

    fn in_order_is_sorted(xs: Vec<i16>) -> bool {
        let tree: OrderedTree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
        let values = tree.in_order_traversal();

        values.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn traversals_visit_every_node(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_, _> = xs.iter().map(|x| (*x, ())).collect();
        let n = tree.len();

        n == xs.iter().collect::<HashSet<_>>().len()
            && tree.level_order_traversal().len() == n
            && tree.pre_order_traversal().len() == n
            && tree.in_order_traversal().len() == n
            && tree.post_order_traversal().len() == n
    }

    fn overwrite_keeps_node_count(xs: Vec<i8>, key: i8) -> bool {
        let mut tree: OrderedTree<_, _> = xs.iter().map(|x| (*x, 0)).collect();
        tree.insert(key, 1);
        let shape = tree.keys().into_iter().copied().collect::<Vec<_>>();
        let len = tree.len();

        tree.insert(key, 2);
        tree.get(&key) == Some(&2)
            && tree.len() == len
            && tree.keys().into_iter().copied().eq(shape)
    }

    fn removing_everything_empties(xs: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_, _> = xs.iter().map(|x| (*x, *x)).collect();
        let was_empty = tree.is_empty();
        for x in &xs {
            tree.remove(x);
        }

        was_empty == xs.is_empty() && tree.is_empty() && tree.len() == 0
    }
}
