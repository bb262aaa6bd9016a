use std::collections::LinkedList;

use crate::hashmap::hash_fn::hash_index;
use crate::hashmap::strategy::{Cell, CollisionStrategy, Insertion};
use crate::hashmap::{Found, InsertOutcome, RemoveOutcome, TableError};
use crate::{Entry, entry};

/// Separate chaining: every index owns a list of entries,
/// so the number of entries is not bounded by the number of buckets
#[derive(Debug)]
pub(crate) struct ChainedBuckets {
    pub(crate) buckets: Vec<LinkedList<Entry>>,
}

impl ChainedBuckets {
    /// Creates `cap` empty buckets
    pub fn new(cap: usize) -> Self {
        Self {
            buckets: (0..cap).map(|_| LinkedList::new()).collect(),
        }
    }

    fn idx(&self, key: &str) -> usize {
        hash_index(key, self.buckets.len())
    }
}

impl CollisionStrategy for ChainedBuckets {
    fn insert(&mut self, key: &str, value: &str) -> Result<Insertion, TableError> {
        let index = self.idx(key);
        let bucket = &mut self.buckets[index];

        match bucket.iter_mut().find(|e| e.key == key) {
            Some(e) => {
                e.value = value.to_string();

                Ok(Insertion {
                    outcome: InsertOutcome::Updated {
                        key: key.into(),
                        value: value.into(),
                        index,
                    },
                    collisions: 0,
                })
            }
            None => {
                // the first entry of a bucket is never a collision
                let collisions = usize::from(!bucket.is_empty());
                bucket.push_back(entry!(key, value));

                Ok(Insertion {
                    outcome: InsertOutcome::Inserted {
                        key: key.into(),
                        value: value.into(),
                        index,
                    },
                    collisions,
                })
            }
        }
    }

    fn lookup(&self, key: &str) -> Option<Found<'_>> {
        let index = self.idx(key);
        self.buckets[index]
            .iter()
            .find(|e| e.key == key)
            .map(|e| Found {
                key: &e.key,
                value: &e.value,
                index,
            })
    }

    fn remove(&mut self, key: &str) -> Option<RemoveOutcome> {
        let index = self.idx(key);
        let bucket = &mut self.buckets[index];
        let pos = bucket.iter().position(|e| e.key == key)?;

        // splice the entry out, keeping the order of the rest of the chain
        let mut tail = bucket.split_off(pos);
        let removed = tail.pop_front()?;
        bucket.append(&mut tail);

        Some(RemoveOutcome::Removed {
            key: removed.key,
            index,
        })
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn cells(&self) -> Vec<Cell<'_>> {
        self.buckets
            .iter()
            .map(|b| Cell::Bucket(b.iter().collect()))
            .collect()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (usize, &Entry)> + '_> {
        Box::new(
            self.buckets
                .iter()
                .enumerate()
                .flat_map(|(i, b)| b.iter().map(move |e| (i, e))),
        )
    }
}

#[cfg(test)]
mod test {
    use super::ChainedBuckets;
    use crate::hashmap::strategy::CollisionStrategy;
    use crate::{InsertOutcome, RemoveOutcome, entry};

    // "a", "e" and "i" all land in bucket 1 of 4
    fn colliding() -> ChainedBuckets {
        let mut t = ChainedBuckets::new(4);
        for k in ["a", "e", "i"] {
            t.insert(k, k).unwrap();
        }
        t
    }

    #[test]
    fn insert() {
        let mut t = ChainedBuckets::new(4);

        let ins = t.insert("a", "1").unwrap();
        assert_eq!(ins.collisions, 0);
        assert_eq!(
            ins.outcome,
            InsertOutcome::Inserted {
                key: "a".into(),
                value: "1".into(),
                index: 1
            }
        );

        let ins = t.insert("e", "2").unwrap();
        assert_eq!(ins.collisions, 1);
        assert_eq!(ins.outcome.index(), 1);

        let ins = t.insert("a", "3").unwrap();
        assert_eq!(ins.collisions, 0);
        assert!(!ins.outcome.is_fresh());
        assert_eq!(t.lookup("a").unwrap().value, "3");

        dbg!(t);
    }

    #[test]
    fn chains_keep_insertion_order() {
        let t = colliding();
        assert_eq!(
            t.buckets[1].iter().collect::<Vec<_>>(),
            vec![&entry!("a", "a"), &entry!("e", "e"), &entry!("i", "i")]
        );
    }

    #[test]
    fn remove_from_middle() {
        let mut t = colliding();

        assert_eq!(
            t.remove("e"),
            Some(RemoveOutcome::Removed {
                key: "e".into(),
                index: 1
            })
        );
        assert_eq!(t.remove("e"), None);
        assert_eq!(
            t.buckets[1].iter().collect::<Vec<_>>(),
            vec![&entry!("a", "a"), &entry!("i", "i")]
        );
        assert!(t.lookup("a").is_some());
        assert!(t.lookup("i").is_some());
        assert!(t.lookup("e").is_none());
    }

    #[test]
    fn entries_more_than_buckets() {
        let mut t = ChainedBuckets::new(3);
        for i in 0..25 {
            let k = format!("{i}");
            t.insert(&k, &k).unwrap();
        }

        assert_eq!(t.entries().count(), 25);
        assert_eq!(t.cells().len(), 3);
        for (i, e) in t.entries() {
            assert_eq!(t.lookup(&e.key).unwrap().index, i);
        }
    }
}
