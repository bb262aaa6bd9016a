use std::fmt;

/// A successful `set`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// New key, placed in an empty slot or appended to a bucket
    Inserted {
        key: String,
        value: String,
        index: usize,
    },
    /// Key already present, value overwritten in place
    Updated {
        key: String,
        value: String,
        index: usize,
    },
    /// New key placed in a tombstone after a full probe cycle found no empty slot
    InsertedIntoTombstone {
        key: String,
        value: String,
        index: usize,
    },
}

impl InsertOutcome {
    /// Bucket or slot the entry ended up in
    pub fn index(&self) -> usize {
        match self {
            InsertOutcome::Inserted { index, .. }
            | InsertOutcome::Updated { index, .. }
            | InsertOutcome::InsertedIntoTombstone { index, .. } => *index,
        }
    }

    /// Whether a new entry was created, as opposed to updated
    pub fn is_fresh(&self) -> bool {
        !matches!(self, InsertOutcome::Updated { .. })
    }
}

impl fmt::Display for InsertOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertOutcome::Inserted { key, value, .. } => write!(f, "inserted: {key} = {value}"),
            InsertOutcome::Updated { key, value, .. } => write!(f, "updated: {key} = {value}"),
            InsertOutcome::InsertedIntoTombstone { key, value, .. } => {
                write!(f, "inserted into tombstone: {key} = {value}")
            }
        }
    }
}

/// A successful `get`, borrowing from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Found<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub index: usize,
}

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "found: {} = {}", self.key, self.value)
    }
}

/// A successful `remove`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Spliced out of its bucket
    Removed { key: String, index: usize },
    /// Slot marked as a tombstone
    Tombstoned { key: String, index: usize },
}

impl RemoveOutcome {
    pub fn index(&self) -> usize {
        match self {
            RemoveOutcome::Removed { index, .. } | RemoveOutcome::Tombstoned { index, .. } => *index,
        }
    }
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveOutcome::Removed { key, .. } => write!(f, "removed: {key}"),
            RemoveOutcome::Tombstoned { key, .. } => write!(f, "removed: {key} (marked as deleted)"),
        }
    }
}
