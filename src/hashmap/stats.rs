use std::fmt;

/// Snapshot of a table's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub capacity: usize,
    pub entries: usize,
    /// Collisions since the last reset
    pub collisions: usize,
}

impl Stats {
    /// `entries / capacity`, exceeds 1 for long chains
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.capacity as f64
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} entries, load factor {:.2}, {} collisions",
            self.entries,
            self.capacity,
            self.load_factor(),
            self.collisions
        )
    }
}
