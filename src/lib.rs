//! This crate exposes an ordered symbol table built on an unbalanced Binary Search Tree,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! associated with it, and up to two child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key therefore takes `O(height)`. On top of that, every `Node` here
//! caches how many `Node`s its subtree holds, which answers order questions (how many
//! keys are smaller than this one? which key is the k-th smallest?) along the same
//! single path.
//!
//! ## Ordered symbol table
//!
//! [`OrderedSymbolTable`] puts, gets and deletes entries, and answers `min`/`max`,
//! `floor`/`ceil`, `rank` and `select` queries. Lookups that can't be answered return
//! an [`Error`] naming why.
//!
//! ## Features
//!
//! - `serde`: serialize and deserialize a table as an ordered map.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![forbid(unsafe_code)]

pub mod error;
pub mod iter;
mod node;
pub mod ordered;
#[cfg(feature = "serde")]
mod serialization;
#[cfg(test)]
mod test;

pub use error::{Error, Result};
pub use ordered::OrderedSymbolTable;
