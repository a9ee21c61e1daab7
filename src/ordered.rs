//! An ordered symbol table backed by an unbalanced Binary Search Tree. Every node caches the
//! size of its subtree which lets order statistics like [`rank`][OrderedSymbolTable::rank] and
//! [`select`][OrderedSymbolTable::select] follow a single root-to-leaf path.
//!
//! The shape of the tree depends entirely on the order keys are inserted in. Random insertion
//! gives an expected depth of about `1.39 lg N`; sorted insertion degrades it to a linked list.
//! Nothing here rebalances.
//!
//! # Examples
//!
//! ```
//! use ordered_st::{Error, OrderedSymbolTable};
//!
//! let mut table = OrderedSymbolTable::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     table.put(key, key * 10);
//! }
//!
//! assert_eq!(table.size(), 7);
//! assert_eq!(table.get(&4), Ok(&40));
//! assert_eq!(table.floor(&6), Ok(&5));
//! assert_eq!(table.ceil(&6), Ok(&7));
//! assert_eq!(table.rank(&7), 4);
//!
//! table.delete_key(&5);
//! assert_eq!(table.get(&5), Err(Error::KeyNotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, Keys, Values};
use crate::node::{self, Link, Node};

/// A symbol table keeping its keys in order. Keys must be totally ordered; values are opaque.
///
/// The table is single threaded and not balanced. Operations cost `O(depth)` of the path they
/// search, so a tree built from sorted input makes them `O(N)`.
pub struct OrderedSymbolTable<K, V> {
    root: Link<K, V>,
}

impl<K, V> Default for OrderedSymbolTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for OrderedSymbolTable<K, V> {
    fn drop(&mut self) {
        // Releasing nodes from a stack keeps degenerate trees from overflowing the call stack.
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K, V> Clone for OrderedSymbolTable<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: node::clone_link(&self.root),
        }
    }
}

impl<K, V> fmt::Debug for OrderedSymbolTable<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> OrderedSymbolTable<K, V> {
    /// Generates a new, empty `OrderedSymbolTable`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns how many keys are in the table. This is `O(1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_st::OrderedSymbolTable;
    ///
    /// let mut table = OrderedSymbolTable::new();
    /// assert_eq!(table.size(), 0);
    ///
    /// table.put(1, 'a');
    /// table.put(1, 'b');
    /// assert_eq!(table.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        node::size(&self.root)
    }

    /// Returns `true` if the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the value stored at the smallest key.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the table is empty.
    pub fn min(&self) -> Result<&V> {
        self.min_node().map(|n| &n.value)
    }

    /// Returns the value stored at the largest key.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the table is empty.
    pub fn max(&self) -> Result<&V> {
        self.max_node().map(|n| &n.value)
    }

    /// Returns the smallest key.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the table is empty.
    pub fn min_key(&self) -> Result<&K> {
        self.min_node().map(|n| &n.key)
    }

    /// Returns the largest key.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the table is empty.
    pub fn max_key(&self) -> Result<&K> {
        self.max_node().map(|n| &n.key)
    }

    /// Returns the key with exactly `rank` smaller keys in the table, i.e. the key at index
    /// `rank` in sorted order.
    ///
    /// # Errors
    ///
    /// [`Error::RankOutOfBounds`] when `rank >= self.size()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_st::OrderedSymbolTable;
    ///
    /// let table: OrderedSymbolTable<_, _> = [(30, ()), (10, ()), (20, ())].into_iter().collect();
    ///
    /// assert_eq!(table.select(0), Ok(&10));
    /// assert_eq!(table.select(2), Ok(&30));
    /// assert!(table.select(3).is_err());
    /// ```
    pub fn select(&self, rank: usize) -> Result<&K> {
        node::select(&self.root, rank).map(|n| &n.key).ok_or_else(|| {
            let size = self.size();
            debug!(rank, size, "select out of bounds");
            Error::RankOutOfBounds { rank, size }
        })
    }

    /// Removes the entry with the smallest key and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the table is empty. The table is left untouched.
    pub fn delete_min(&mut self) -> Result<(K, V)> {
        let min = node::delete_min(&mut self.root).ok_or(Error::EmptyTree)?;
        trace!(size = self.size(), "deleted minimum");
        let Node { key, value, .. } = *min;
        Ok((key, value))
    }

    /// Removes the entry with the largest key and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] when the table is empty. The table is left untouched.
    pub fn delete_max(&mut self) -> Result<(K, V)> {
        let max = node::delete_max(&mut self.root).ok_or(Error::EmptyTree)?;
        trace!(size = self.size(), "deleted maximum");
        let Node { key, value, .. } = *max;
        Ok((key, value))
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.size())
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Iterates over the values in the order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    fn min_node(&self) -> Result<&Node<K, V>> {
        self.root.as_deref().map(Node::min).ok_or(Error::EmptyTree)
    }

    fn max_node(&self) -> Result<&Node<K, V>> {
        self.root.as_deref().map(Node::max).ok_or(Error::EmptyTree)
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Link<K, V> {
        &self.root
    }
}

impl<K, V> OrderedSymbolTable<K, V>
where
    K: Ord,
{
    /// Inserts the given value into the table at the given key. Inserting a new value for an
    /// existing key overwrites its value in place and returns the old one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_st::OrderedSymbolTable;
    ///
    /// let mut table = OrderedSymbolTable::new();
    ///
    /// assert_eq!(table.put(1, 2), None);
    /// assert_eq!(table.get(&1), Ok(&2));
    ///
    /// assert_eq!(table.put(1, 3), Some(2));
    /// assert_eq!(table.get(&1), Ok(&3));
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        node::put(&mut self.root, key, value)
    }

    /// Finds the value associated with the given key.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no entry has the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_st::{Error, OrderedSymbolTable};
    ///
    /// let mut table = OrderedSymbolTable::new();
    /// table.put(1, 2);
    ///
    /// assert_eq!(table.get(&1), Ok(&2));
    /// assert_eq!(table.get(&42), Err(Error::KeyNotFound));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V> {
        let mut current = self.root.as_deref();
        while let Some(n) = current {
            current = match key.cmp(&n.key) {
                Ordering::Less => n.left.as_deref(),
                Ordering::Equal => return Ok(&n.value),
                Ordering::Greater => n.right.as_deref(),
            };
        }
        debug!(size = self.size(), "key not found");
        Err(Error::KeyNotFound)
    }

    /// Returns `true` if the table holds an entry for `key`.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_ok()
    }

    /// Returns the largest key less than or equal to `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NoFloor`] when every key in the table is greater than `key` (including when
    /// the table is empty).
    pub fn floor(&self, key: &K) -> Result<&K> {
        node::floor(&self.root, key).map(|n| &n.key).ok_or_else(|| {
            debug!(size = self.size(), "no floor");
            Error::NoFloor
        })
    }

    /// Returns the smallest key greater than or equal to `key`.
    ///
    /// # Errors
    ///
    /// [`Error::NoCeil`] when every key in the table is less than `key` (including when the
    /// table is empty).
    pub fn ceil(&self, key: &K) -> Result<&K> {
        node::ceil(&self.root, key).map(|n| &n.key).ok_or_else(|| {
            debug!(size = self.size(), "no ceil");
            Error::NoCeil
        })
    }

    /// Returns how many keys in the table are strictly less than `key`. The key itself doesn't
    /// need to be in the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_st::OrderedSymbolTable;
    ///
    /// let table: OrderedSymbolTable<_, _> = [1, 3, 5].into_iter().map(|k| (k, ())).collect();
    ///
    /// assert_eq!(table.rank(&0), 0);
    /// assert_eq!(table.rank(&3), 1);
    /// assert_eq!(table.rank(&4), 2);
    /// assert_eq!(table.rank(&9), 3);
    /// ```
    pub fn rank(&self, key: &K) -> usize {
        node::rank(&self.root, key)
    }

    /// Returns how many keys lie in the inclusive range `[lo, hi]`, or zero when `lo > hi`.
    pub fn range_len(&self, lo: &K, hi: &K) -> usize {
        if lo > hi {
            return 0;
        }
        let below_hi = self.rank(hi) + usize::from(self.contains(hi));
        below_hi - self.rank(lo)
    }

    /// Removes the entry with the given key and returns its value. If the table has no entry
    /// for the key, nothing happens.
    ///
    /// A node with two children is replaced by the smallest node of its right subtree (Hibbard
    /// deletion). Many deletions done this way leave the tree lopsided.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_st::OrderedSymbolTable;
    ///
    /// let mut table = OrderedSymbolTable::new();
    /// table.put(1, 2);
    ///
    /// assert_eq!(table.delete_key(&1), Some(2));
    /// assert_eq!(table.delete_key(&1), None);
    /// assert!(table.is_empty());
    /// ```
    pub fn delete_key(&mut self, key: &K) -> Option<V> {
        let deleted = node::delete(&mut self.root, key);
        if deleted.is_some() {
            trace!(size = self.size(), "deleted key");
        }
        deleted
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedSymbolTable<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<K, V> Extend<(K, V)> for OrderedSymbolTable<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedSymbolTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedSymbolTable<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = self.size();
        IntoIter::new(self.root.take(), len)
    }
}
