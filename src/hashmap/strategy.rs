use std::fmt::Debug;

use crate::Entry;
use crate::hashmap::{Found, InsertOutcome, RemoveOutcome, TableError};

/// Backing store of a [`HashTable`](crate::HashTable), one per collision strategy.
///
/// Implementors never see an empty key, and never touch the table's
/// counters: they report what happened and the table does the bookkeeping.
pub(crate) trait CollisionStrategy: Debug {
    /// Inserts or updates `key`. On error nothing has been modified.
    fn insert(&mut self, key: &str, value: &str) -> Result<Insertion, TableError>;

    fn lookup(&self, key: &str) -> Option<Found<'_>>;

    fn remove(&mut self, key: &str) -> Option<RemoveOutcome>;

    /// Number of buckets or slots
    fn capacity(&self) -> usize;

    /// One cell per index, in index order
    fn cells(&self) -> Vec<Cell<'_>>;

    /// Live entries with the index they are stored at
    fn entries(&self) -> Box<dyn Iterator<Item = (usize, &Entry)> + '_>;
}

/// What an insert did, plus the collisions it ran into on the way
#[derive(Debug)]
pub(crate) struct Insertion {
    pub(crate) outcome: InsertOutcome,
    pub(crate) collisions: usize,
}

/// Read-only view of a single index of the backing store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell<'a> {
    /// Chaining bucket, entries in insertion order
    Bucket(Vec<&'a Entry>),
    /// Open-addressing slot that was never used
    Empty,
    /// Open-addressing slot holding an entry
    Occupied(&'a Entry),
    /// Open-addressing slot whose entry was removed
    Tombstone,
}
