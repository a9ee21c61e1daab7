//! Errors reported by [`OrderedSymbolTable`][crate::OrderedSymbolTable] queries.

use thiserror::Error;

/// Why an operation on an [`OrderedSymbolTable`][crate::OrderedSymbolTable] could not produce
/// an answer. Every variant is a usage error scoped to the failing call; the table is left
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// `get` was asked for a key the table doesn't contain.
    #[error("no such key")]
    KeyNotFound,
    /// `min`, `max` or one of the `delete_min`/`delete_max` operations was called on a table
    /// with no nodes.
    #[error("the table is empty")]
    EmptyTree,
    /// Every key in the table is greater than the queried key.
    #[error("no key is less than or equal to the given key")]
    NoFloor,
    /// Every key in the table is less than the queried key.
    #[error("no key is greater than or equal to the given key")]
    NoCeil,
    /// `select` was asked for a rank the table doesn't have.
    #[error("rank {rank} is out of bounds for a table of size {size}")]
    RankOutOfBounds {
        /// The requested rank.
        rank: usize,
        /// How many keys the table held.
        size: usize,
    },
}

/// Shorthand for results of table operations.
pub type Result<T> = std::result::Result<T, Error>;
