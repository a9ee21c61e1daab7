//! Helpers shared by the unit and property tests.


use crate::node::{self, Link};
use crate::OrderedSymbolTable;

/// Walks the whole table asserting that keys are in order (every key in a left subtree is
/// smaller than its parent's, every key in a right subtree larger) and that each cached count
/// equals the size of its subtree.
pub(crate) fn assert_invariants<K: Ord, V>(table: &OrderedSymbolTable<K, V>) {
    check(table.root(), None, None);
}

/// Returns how many nodes are under `link`, asserting every key lies strictly between the
/// bounds.
fn check<K: Ord, V>(link: &Link<K, V>, lower: Option<&K>, upper: Option<&K>) -> usize {
    let Some(n) = link else {
        return 0;
    };
    if let Some(lower) = lower {
        assert!(&n.key > lower, "key out of order with an ancestor on its left");
    }
    if let Some(upper) = upper {
        assert!(&n.key < upper, "key out of order with an ancestor on its right");
    }

    let count = check(&n.left, lower, Some(&n.key)) + check(&n.right, Some(&n.key), upper) + 1;
    assert_eq!(n.count, count, "cached count disagrees with subtree");
    assert_eq!(node::size(link), count);
    count
}
