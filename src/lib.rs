//! A fixed-capacity hash table over string keys and values, resolving
//! collisions either by separate chaining or by open addressing with
//! linear probing and tombstones.
//!
//! ```
//! use hashtable::{HashTable, Strategy, TableConfig};
//!
//! let config = TableConfig::new(8, Strategy::OpenAddressing).unwrap();
//! let mut table = HashTable::new(config);
//!
//! table.set("foo", "bar").unwrap();
//! assert_eq!(table.get("foo").unwrap().value, "bar");
//!
//! table.remove("foo").unwrap();
//! assert!(table.get("foo").is_err());
//! ```

mod config;
mod hashmap;
mod macros;

pub use config::{DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY, Strategy, TableConfig};
pub use hashmap::{
    Cell, Found, HashTable, InsertOutcome, Operation, Polynomial31, RemoveOutcome, Stats,
    TableError, hash_index, hash_str,
};

/// A key-value pair stored in the table
#[derive(Hash, PartialEq, Eq, Clone)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.key, self.value)
    }
}
