use std::{fmt, str::FromStr};

use crate::TableError;

/// Smallest capacity a table can be built with
pub const MIN_CAPACITY: usize = 3;
/// Upper bound applied by [`TableConfig::clamped`]
pub const MAX_CAPACITY: usize = 64;
pub const DEFAULT_CAPACITY: usize = 8;

/// How colliding keys are stored
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Every index holds a list of entries
    #[default]
    Chaining,
    /// Every index holds at most one entry, collisions probe forward
    OpenAddressing,
}

impl Strategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Strategy::Chaining => "chaining",
            Strategy::OpenAddressing => "open-addressing",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "chaining" => Ok(Strategy::Chaining),
            "open-addressing" => Ok(Strategy::OpenAddressing),
            other => Err(TableError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Capacity and strategy a [`HashTable`](crate::HashTable) is built from.
///
/// The capacity is validated on construction, so a table built from a
/// `TableConfig` never has to check it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    capacity: usize,
    strategy: Strategy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strategy: Strategy::default(),
        }
    }
}

impl TableConfig {
    /// Fails with [`TableError::InvalidCapacity`] if `capacity < MIN_CAPACITY`
    pub fn new(capacity: usize, strategy: Strategy) -> Result<Self, TableError> {
        if capacity < MIN_CAPACITY {
            return Err(TableError::InvalidCapacity {
                capacity,
                min: MIN_CAPACITY,
            });
        }

        Ok(Self { capacity, strategy })
    }

    /// Forces `capacity` into `MIN_CAPACITY..=MAX_CAPACITY` instead of failing,
    /// for callers feeding in raw user input
    pub fn clamped(capacity: usize, strategy: Strategy) -> Self {
        Self {
            capacity: capacity.clamp(MIN_CAPACITY, MAX_CAPACITY),
            strategy,
        }
    }

    /// Same capacity, different strategy
    pub fn with_strategy(self, strategy: Strategy) -> Self {
        Self { strategy, ..self }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}
