use std::fmt;

use thiserror::Error;

mod chaining;
mod hash_fn;
mod hash_table;
mod open_addressing;
mod outcome;
mod stats;
mod strategy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Empty key passed to any operation, nothing was touched
    #[error("key cannot be empty")]
    InvalidKey,

    /// No empty slot or tombstone left after a full probe cycle (open addressing only)
    #[error("table full")]
    TableFull,

    /// The key is not in the table, a normal negative outcome of a lookup or removal
    #[error("{during}: {key}")]
    NotFound { key: String, during: Operation },

    #[error("invalid capacity {capacity}, expected at least {min}")]
    InvalidCapacity { capacity: usize, min: usize },

    #[error("unknown strategy {0:?}, expected \"chaining\" or \"open-addressing\"")]
    UnknownStrategy(String),
}

impl TableError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound { .. })
    }
}

/// The operation that missed, for [`TableError::NotFound`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Lookup,
    Removal,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Lookup => f.write_str("not found"),
            Operation::Removal => f.write_str("not found for removal"),
        }
    }
}

pub use hash_fn::{Polynomial31, hash_index, hash_str};
pub use hash_table::HashTable;
pub use outcome::{Found, InsertOutcome, RemoveOutcome};
pub use stats::Stats;
pub use strategy::Cell;
