use log::{debug, trace};

use crate::config::{Strategy, TableConfig};
use crate::hashmap::chaining::ChainedBuckets;
use crate::hashmap::open_addressing::ProbedSlots;
use crate::hashmap::strategy::{Cell, CollisionStrategy, Insertion};
use crate::hashmap::{Found, InsertOutcome, Operation, RemoveOutcome, Stats, TableError};
use crate::Entry;

/// Fixed-capacity string hash table.
///
/// The capacity and strategy are chosen once, from a [`TableConfig`], and
/// can only be changed by [`reset`](HashTable::reset), which throws away
/// every entry. There is no resizing: with open addressing the table fills
/// up, with chaining the chains grow.
#[derive(Debug)]
pub struct HashTable {
    store: Box<dyn CollisionStrategy>,
    config: TableConfig,
    entries: usize,
    collisions: usize,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl HashTable {
    /// Creates a new, empty table
    pub fn new(config: TableConfig) -> Self {
        debug!(target: "reset", "new {} table with {} slots", config.strategy(), config.capacity());
        Self {
            store: build_store(&config),
            config,
            entries: 0,
            collisions: 0,
        }
    }

    /// Shorthand for `TableConfig::new` followed by `HashTable::new`
    pub fn with_capacity(capacity: usize, strategy: Strategy) -> Result<Self, TableError> {
        TableConfig::new(capacity, strategy).map(Self::new)
    }

    /// Inserts `key`, or overwrites its value if it is already present.
    ///
    /// Fails with [`TableError::InvalidKey`] for an empty key and, with open
    /// addressing, [`TableError::TableFull`] when a new key has nowhere to go.
    /// A failed call changes nothing, counters included.
    pub fn set(&mut self, key: &str, value: &str) -> Result<InsertOutcome, TableError> {
        let key = valid_key(key)?;
        let Insertion {
            outcome,
            collisions,
        } = self.store.insert(key, value).inspect_err(|e| {
            trace!(target: "set", "{key}: {e}");
        })?;

        if outcome.is_fresh() {
            self.entries += 1;
        }
        self.collisions += collisions;

        trace!(target: "set", "[{}] {outcome}, {collisions} collisions", outcome.index());
        Ok(outcome)
    }

    /// Looks up `key`. A missing key is [`TableError::NotFound`]
    pub fn get(&self, key: &str) -> Result<Found<'_>, TableError> {
        let key = valid_key(key)?;
        match self.store.lookup(key) {
            Some(found) => {
                trace!(target: "get", "[{}] {found}", found.index);
                Ok(found)
            }
            None => Err(not_found(key, Operation::Lookup)),
        }
    }

    /// Whether `key` is present. An empty key is never present, so the
    /// `InvalidKey` error of [`get`](HashTable::get) turns into `false`
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Removes `key`. With chaining it is spliced out of its bucket, with
    /// open addressing its slot becomes a tombstone.
    pub fn remove(&mut self, key: &str) -> Result<RemoveOutcome, TableError> {
        let key = valid_key(key)?;
        match self.store.remove(key) {
            Some(removed) => {
                self.entries -= 1;
                trace!(target: "remove", "[{}] {removed}", removed.index());
                Ok(removed)
            }
            None => Err(not_found(key, Operation::Removal)),
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            capacity: self.capacity(),
            entries: self.entries,
            collisions: self.collisions,
        }
    }

    /// Throws away every entry and rebuilds an empty table from `config`,
    /// zeroing the counters
    pub fn reset(&mut self, config: TableConfig) {
        debug!(
            target: "reset",
            "dropping {} entries, rebuilding as {} with {} slots",
            self.entries,
            config.strategy(),
            config.capacity()
        );
        *self = Self::new(config);
    }

    /// Shorthand for `self.reset(self.config())`
    pub fn clear(&mut self) {
        self.reset(self.config);
    }

    /// Returns the number of entries in the table
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, or slots
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Collision strategy the table was built with
    pub fn strategy(&self) -> Strategy {
        self.config.strategy()
    }

    /// Configuration the table was built or last reset with
    pub fn config(&self) -> TableConfig {
        self.config
    }

    /// Layout of the backing store, one [`Cell`] per index
    pub fn cells(&self) -> Vec<Cell<'_>> {
        self.store.cells()
    }

    // [adapters]

    /// Iterates over the entries in index order, each chain in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.store.entries().map(|(_, e)| e)
    }
}

impl<'a> IntoIterator for &'a HashTable {
    type Item = &'a Entry;
    type IntoIter = Box<dyn Iterator<Item = &'a Entry> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

// [private]

fn build_store(config: &TableConfig) -> Box<dyn CollisionStrategy> {
    match config.strategy() {
        Strategy::Chaining => Box::new(ChainedBuckets::new(config.capacity())),
        Strategy::OpenAddressing => Box::new(ProbedSlots::new(config.capacity())),
    }
}

fn valid_key(key: &str) -> Result<&str, TableError> {
    if key.is_empty() {
        trace!(target: "validate", "rejecting empty key");
        Err(TableError::InvalidKey)
    } else {
        Ok(key)
    }
}

fn not_found(key: &str, during: Operation) -> TableError {
    let err = TableError::NotFound {
        key: key.to_string(),
        during,
    };
    trace!(target: "not_found", "{err}");
    err
}
