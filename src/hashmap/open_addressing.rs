use crate::hashmap::hash_fn::hash_index;
use crate::hashmap::strategy::{Cell, CollisionStrategy, Insertion};
use crate::hashmap::{Found, InsertOutcome, RemoveOutcome, TableError};
use crate::{Entry, entry};

/// State of a single open-addressing slot.
///
/// `Empty` ends a probe sequence, `Tombstone` does not: keys that were
/// pushed past a slot while it was occupied must stay reachable after it is
/// removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
    Tombstone,
}

impl Slot {
    fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// Open addressing with linear probing, at most one entry per slot
#[derive(Debug)]
pub(crate) struct ProbedSlots {
    pub(crate) slots: Vec<Slot>,
}

impl ProbedSlots {
    pub fn new(cap: usize) -> Self {
        let mut slots = Vec::with_capacity(cap);
        slots.resize_with(cap, Default::default);
        Self { slots }
    }

    /// `start, start + 1, ...` wrapping around, one full cycle
    fn probe(&self, start: usize) -> impl Iterator<Item = usize> {
        let cap = self.slots.len();
        (0..cap).map(move |step| (start + step) % cap)
    }

    /// Slot holding `key`, stopping at the first empty slot
    fn find(&self, key: &str) -> Option<usize> {
        let start = hash_index(key, self.slots.len());
        for i in self.probe(start) {
            match &self.slots[i] {
                Slot::Empty => return None,
                Slot::Occupied(e) if e.key == key => return Some(i),
                Slot::Occupied(_) | Slot::Tombstone => {}
            }
        }
        None
    }
}

impl CollisionStrategy for ProbedSlots {
    /// Probes from the hash index for one full cycle. The first empty slot or
    /// the matching key ends the scan. The first tombstone seen is only
    /// reused once the cycle is exhausted without either.
    fn insert(&mut self, key: &str, value: &str) -> Result<Insertion, TableError> {
        let cap = self.slots.len();
        let start = hash_index(key, cap);

        let mut first_tombstone = None;
        let mut collisions = 0;
        let mut i = start;

        for _ in 0..cap {
            let slot = &mut self.slots[i];
            match slot {
                Slot::Empty => {
                    *slot = Slot::Occupied(entry!(key, value));

                    return Ok(Insertion {
                        outcome: InsertOutcome::Inserted {
                            key: key.into(),
                            value: value.into(),
                            index: i,
                        },
                        collisions,
                    });
                }
                Slot::Occupied(e) if e.key == key => {
                    e.value = value.to_string();

                    return Ok(Insertion {
                        outcome: InsertOutcome::Updated {
                            key: key.into(),
                            value: value.into(),
                            index: i,
                        },
                        collisions,
                    });
                }
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(i);
                }
                Slot::Occupied(_) => {}
            }

            i = (i + 1) % cap;
            // stepping onto anything but an empty slot is a collision,
            // except when we wrapped back to where we started
            if i != start && !self.slots[i].is_empty() {
                collisions += 1;
            }
        }

        match first_tombstone {
            Some(t) => {
                self.slots[t] = Slot::Occupied(entry!(key, value));

                Ok(Insertion {
                    outcome: InsertOutcome::InsertedIntoTombstone {
                        key: key.into(),
                        value: value.into(),
                        index: t,
                    },
                    collisions,
                })
            }
            // nothing was written, and the collisions are dropped with the attempt
            None => Err(TableError::TableFull),
        }
    }

    fn lookup(&self, key: &str) -> Option<Found<'_>> {
        let index = self.find(key)?;
        match &self.slots[index] {
            Slot::Occupied(e) => Some(Found {
                key: &e.key,
                value: &e.value,
                index,
            }),
            Slot::Empty | Slot::Tombstone => None,
        }
    }

    fn remove(&mut self, key: &str) -> Option<RemoveOutcome> {
        let index = self.find(key)?;
        // never back to `Empty`, that would cut probe chains running through here
        let Slot::Occupied(e) = std::mem::replace(&mut self.slots[index], Slot::Tombstone) else {
            unreachable!("find only returns occupied slots");
        };

        Some(RemoveOutcome::Tombstoned { key: e.key, index })
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn cells(&self) -> Vec<Cell<'_>> {
        self.slots
            .iter()
            .map(|s| match s {
                Slot::Empty => Cell::Empty,
                Slot::Occupied(e) => Cell::Occupied(e),
                Slot::Tombstone => Cell::Tombstone,
            })
            .collect()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (usize, &Entry)> + '_> {
        Box::new(self.slots.iter().enumerate().filter_map(|(i, s)| match s {
            Slot::Occupied(e) => Some((i, e)),
            Slot::Empty | Slot::Tombstone => None,
        }))
    }
}

#[cfg(test)]
mod test {
    use super::{ProbedSlots, Slot};
    use crate::hashmap::strategy::CollisionStrategy;
    use crate::{InsertOutcome, RemoveOutcome, TableError, entry};

    // with 3 slots: "a" -> 1, "b" -> 2, "c" -> 0, "d" -> 1
    fn full() -> ProbedSlots {
        let mut t = ProbedSlots::new(3);
        for k in ["a", "b", "c"] {
            let ins = t.insert(k, k).unwrap();
            assert_eq!(ins.collisions, 0);
        }
        t
    }

    #[test]
    fn insert_at_hash_index() {
        let t = full();
        assert_eq!(
            t.slots,
            vec![
                Slot::Occupied(entry!("c", "c")),
                Slot::Occupied(entry!("a", "a")),
                Slot::Occupied(entry!("b", "b")),
            ]
        );
    }

    #[test]
    fn full_table_is_untouched() {
        let mut t = full();
        let before = t.slots.clone();

        assert_eq!(t.insert("d", "d").unwrap_err(), TableError::TableFull);
        assert_eq!(t.slots, before);

        // updates still work on a full table
        let ins = t.insert("c", "new").unwrap();
        assert_eq!(ins.outcome.index(), 0);
        assert!(!ins.outcome.is_fresh());
    }

    #[test]
    fn tombstone_reused_after_full_cycle() {
        let mut t = full();

        assert_eq!(
            t.remove("b"),
            Some(RemoveOutcome::Tombstoned {
                key: "b".into(),
                index: 2
            })
        );
        assert_eq!(t.slots[2], Slot::Tombstone);

        // "d" probes 1 (a), 2 (tombstone), 0 (c) and falls back to the tombstone
        let ins = t.insert("d", "d").unwrap();
        assert_eq!(
            ins.outcome,
            InsertOutcome::InsertedIntoTombstone {
                key: "d".into(),
                value: "d".into(),
                index: 2
            }
        );
        assert_eq!(ins.collisions, 2);
    }

    #[test]
    fn empty_slot_wins_over_earlier_tombstone() {
        // with 4 slots "a", "e" and "i" all hash to 1
        let mut t = ProbedSlots::new(4);

        let ins = t.insert("a", "a").unwrap();
        assert_eq!((ins.outcome.index(), ins.collisions), (1, 0));
        // steps from 1 onto the empty slot 2, which is not a collision
        let ins = t.insert("e", "e").unwrap();
        assert_eq!((ins.outcome.index(), ins.collisions), (2, 0));

        t.remove("a").unwrap();

        // 1 is a tombstone, 2 holds "e", 3 is empty
        let ins = t.insert("i", "i").unwrap();
        assert_eq!(
            ins.outcome,
            InsertOutcome::Inserted {
                key: "i".into(),
                value: "i".into(),
                index: 3
            }
        );
        assert_eq!(ins.collisions, 1);
        assert_eq!(t.slots[1], Slot::Tombstone);
    }

    #[test]
    fn probe_continues_past_tombstones() {
        let mut t = ProbedSlots::new(4);
        t.insert("a", "a").unwrap();
        t.insert("e", "e").unwrap();
        t.remove("a").unwrap();

        let found = t.lookup("e").unwrap();
        assert_eq!((found.value, found.index), ("e", 2));
        assert!(t.lookup("a").is_none());

        // update walks past the tombstone too, and steps onto an occupied slot
        let ins = t.insert("e", "E").unwrap();
        assert_eq!((ins.outcome.index(), ins.collisions), (2, 1));
        assert!(!ins.outcome.is_fresh());

        assert_eq!(
            t.remove("e"),
            Some(RemoveOutcome::Tombstoned {
                key: "e".into(),
                index: 2
            })
        );
        assert!(t.lookup("e").is_none());
        assert_eq!(t.remove("e"), None);
    }

    #[test]
    fn remove_only_tombstones_its_own_slot() {
        let mut t = full();
        let before = t.slots.clone();

        // "d" hashes to 1 like "a", but is not in the table
        assert_eq!(t.remove("d"), None);
        assert_eq!(t.slots, before);

        let removed = t.remove("a").unwrap();
        assert_eq!(removed.index(), 1);
        assert_eq!(
            t.slots,
            vec![
                Slot::Occupied(entry!("c", "c")),
                Slot::Tombstone,
                Slot::Occupied(entry!("b", "b")),
            ]
        );

        // a second removal walks past the tombstone and leaves it alone
        assert_eq!(t.remove("a"), None);
        assert_eq!(t.slots[1], Slot::Tombstone);
        assert_eq!(t.entries().count(), 2);
    }

    #[test]
    fn empty_slot_ends_probe() {
        let mut t = ProbedSlots::new(4);
        t.insert("a", "a").unwrap();
        // "e" hashes to 1 as well, but slot 2 is empty
        assert_eq!(t.find("e"), None);
        assert_eq!(t.remove("e"), None);
    }

    #[test]
    fn all_tombstones_terminates() {
        let mut t = full();
        for k in ["a", "b", "c"] {
            t.remove(k).unwrap();
        }
        assert!(t.slots.iter().all(|s| *s == Slot::Tombstone));
        assert!(t.lookup("a").is_none());
        assert_eq!(t.entries().count(), 0);

        // "a" probes the whole cycle and reuses the first tombstone it saw
        let ins = t.insert("a", "again").unwrap();
        assert_eq!(ins.outcome.index(), 1);
        assert!(ins.outcome.is_fresh());
        dbg!(t);
    }
}
