//! The `Node` of an [`OrderedSymbolTable`][crate::OrderedSymbolTable] and the recursive
//! algorithms that walk a [`Link`].
//!
//! Mutating algorithms take a `&mut Link` and rewrite it in place, so a subtree is handed
//! back up to its parent by overwriting the parent's link. Counts are fixed on the way back
//! up the recursion.

use std::cmp::Ordering;
use std::mem;

use tracing::trace;

/// An owning, possibly empty, pointer to a subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A key, its value, and the two subtrees hanging off it.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,

    /// How many nodes are in the subtree rooted at this node, including itself.
    pub(crate) count: usize,
}

/// Number of nodes under `link`. An empty link holds zero.
pub(crate) fn size<K, V>(link: &Link<K, V>) -> usize {
    link.as_ref().map_or(0, |node| node.count)
}

/// Deep copies the subtree under `link`. Nodes are rebuilt in post-order from an explicit stack
/// so a degenerate tree doesn't recurse once per level.
pub(crate) fn clone_link<K: Clone, V: Clone>(link: &Link<K, V>) -> Link<K, V> {
    // `false` means the node's children haven't been copied yet.
    let mut pending: Vec<(&Node<K, V>, bool)> = Vec::new();
    pending.extend(link.as_deref().map(|n| (n, false)));
    let mut built: Vec<Box<Node<K, V>>> = Vec::new();

    while let Some((node, children_built)) = pending.pop() {
        if !children_built {
            pending.push((node, true));
            pending.extend(node.right.as_deref().map(|n| (n, false)));
            pending.extend(node.left.as_deref().map(|n| (n, false)));
            continue;
        }

        // The left copy was finished first so it sits under the right one.
        let right = node.right.as_ref().and_then(|_| built.pop());
        let left = node.left.as_ref().and_then(|_| built.pop());
        built.push(Box::new(Node {
            key: node.key.clone(),
            value: node.value.clone(),
            left,
            right,
            count: node.count,
        }));
    }

    built.pop()
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
            count: 1,
        })
    }

    fn fix_count(&mut self) {
        self.count = size(&self.left) + size(&self.right) + 1;
    }

    /// The leftmost node of this subtree.
    pub(crate) fn min(&self) -> &Self {
        match &self.left {
            Some(left) => left.min(),
            None => self,
        }
    }

    /// The rightmost node of this subtree.
    pub(crate) fn max(&self) -> &Self {
        match &self.right {
            Some(right) => right.max(),
            None => self,
        }
    }

    /// Detaches the leftmost node of this subtree. Returns it, childless and with a count of
    /// one, along with what is left of the subtree.
    fn split_min(mut self: Box<Self>) -> (Box<Self>, Link<K, V>) {
        match self.left.take() {
            None => {
                let rest = self.right.take();
                self.count = 1;
                (self, rest)
            }
            Some(left) => {
                let (min, rest) = left.split_min();
                self.left = rest;
                self.fix_count();
                (min, Some(self))
            }
        }
    }

    /// Mirror of [`Node::split_min`].
    fn split_max(mut self: Box<Self>) -> (Box<Self>, Link<K, V>) {
        match self.right.take() {
            None => {
                let rest = self.left.take();
                self.count = 1;
                (self, rest)
            }
            Some(right) => {
                let (max, rest) = right.split_max();
                self.right = rest;
                self.fix_count();
                (max, Some(self))
            }
        }
    }
}

/// Inserts `value` at `key` below `link`, creating a node in the first empty slot the search
/// reaches. Returns the overwritten value if the key was already present.
pub(crate) fn put<K: Ord, V>(link: &mut Link<K, V>, key: K, value: V) -> Option<V> {
    let Some(node) = link else {
        trace!("creating node");
        *link = Some(Node::new_boxed(key, value));
        return None;
    };

    let replaced = match key.cmp(&node.key) {
        Ordering::Less => put(&mut node.left, key, value),
        Ordering::Equal => {
            trace!("replacing value of existing node");
            Some(mem::replace(&mut node.value, value))
        }
        Ordering::Greater => put(&mut node.right, key, value),
    };
    node.fix_count();
    replaced
}

/// The node holding the largest key less than or equal to `key`.
pub(crate) fn floor<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Less => floor(&node.left, key),
        // Nothing on the right being small enough makes this node the best candidate.
        Ordering::Greater => floor(&node.right, key).or(Some(node)),
    }
}

/// The node holding the smallest key greater than or equal to `key`.
pub(crate) fn ceil<'a, K: Ord, V>(link: &'a Link<K, V>, key: &K) -> Option<&'a Node<K, V>> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Equal => Some(node),
        Ordering::Greater => ceil(&node.right, key),
        Ordering::Less => ceil(&node.left, key).or(Some(node)),
    }
}

/// Number of keys below `link` strictly less than `key`.
pub(crate) fn rank<K: Ord, V>(link: &Link<K, V>, key: &K) -> usize {
    let mut rank = 0;
    let mut current = link;
    while let Some(node) = current {
        match key.cmp(&node.key) {
            Ordering::Less => current = &node.left,
            Ordering::Equal => return rank + size(&node.left),
            Ordering::Greater => {
                rank += size(&node.left) + 1;
                current = &node.right;
            }
        }
    }
    rank
}

/// The node with exactly `rank` smaller keys below `link`.
pub(crate) fn select<K, V>(link: &Link<K, V>, mut rank: usize) -> Option<&Node<K, V>> {
    let mut current = link.as_deref();
    while let Some(node) = current {
        let left = size(&node.left);
        match rank.cmp(&left) {
            Ordering::Less => current = node.left.as_deref(),
            Ordering::Equal => return Some(node),
            Ordering::Greater => {
                rank -= left + 1;
                current = node.right.as_deref();
            }
        }
    }
    None
}

/// Unlinks the node with the smallest key below `link`, promoting its right subtree into its
/// place.
pub(crate) fn delete_min<K, V>(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    let (min, rest) = link.take()?.split_min();
    *link = rest;
    Some(min)
}

/// Unlinks the node with the largest key below `link`, promoting its left subtree into its
/// place.
pub(crate) fn delete_max<K, V>(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
    let (max, rest) = link.take()?.split_max();
    *link = rest;
    Some(max)
}

/// Removes `key` from below `link` and returns its value.
///
/// A node with two children is replaced by its successor (the minimum of its right subtree),
/// i.e. Hibbard deletion. Repeated deletions this way skew the tree to the left over time.
pub(crate) fn delete<K: Ord, V>(link: &mut Link<K, V>, key: &K) -> Option<V> {
    let node = link.as_mut()?;
    let deleted = match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal => {
            let mut target = link.take()?;
            *link = match (target.left.take(), target.right.take()) {
                (None, right) => right,
                (left, None) => left,
                (Some(left), Some(right)) => {
                    let (mut successor, right) = right.split_min();
                    trace!(subtree = target.count, "promoting successor");
                    successor.left = Some(left);
                    successor.right = right;
                    successor.fix_count();
                    Some(successor)
                }
            };
            return Some(target.value);
        }
    };
    node.fix_count();
    deleted
}
