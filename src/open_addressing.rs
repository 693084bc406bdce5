//! Open addressing with double hashing over a fixed number of slots.
//!
//! For a key with hash magnitude `k` in a table of `m` slots, attempt `i` looks at
//! `(h1(k) + i * h2(k)) mod m` where `h1(k) = k mod m` and `h2(k) = 1 + k mod (m - 1)`.
//! At most `m` attempts are made. The table never grows: once no probe finds a free slot,
//! inserting a new key fails with [`TableError::Overflow`].
//!
//! Deleting a key leaves a tombstone behind. Lookups walk past tombstones and only stop at a
//! slot that was never used, so removing one key never hides another key that was displaced
//! past it. Insertion reuses the first tombstone on the probe path once it has checked that the
//! key is not stored further along.

use crate::error::{Result, TableError};
use crate::hash::{hash_code, magnitude};
use crate::store::BucketStore;
use crate::table::HashTable;
use crate::DEFAULT_CAPACITY;
use log::warn;
use std::hash::Hash;
use std::mem;

#[derive(Debug, Clone, Default)]
enum Slot<K, V> {
    #[default]
    Empty,
    Tombstone,
    Occupied(K, V),
}

/// The double-hashing probe sequence of one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    index: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl Probe {
    pub fn new(code: u32, capacity: usize) -> Self {
        let k: u64 = magnitude(code);
        let m: u64 = capacity as u64;
        // With a single slot `m - 1` is zero; every step then lands back on slot 0.
        let step: u64 = 1 + k % (m - 1).max(1);
        Probe {
            index: (k % m) as usize,
            step: (step % m) as usize,
            capacity,
            remaining: capacity,
        }
    }

    /// The distance between two consecutive probes.
    pub fn step(&self) -> usize {
        self.step
    }
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let index: usize = self.index;
        self.index = (self.index + self.step) % self.capacity;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[derive(Debug, Clone)]
pub struct OpenAddressTable<K, V> {
    store: BucketStore<Slot<K, V>>,
}

impl<K, V> OpenAddressTable<K, V>
where
    K: Hash + Eq,
{
    /// An empty table of 16 slots.
    pub fn new() -> Self {
        OpenAddressTable {
            store: BucketStore::with_slots(DEFAULT_CAPACITY),
        }
    }

    /// An empty table of exactly `capacity` slots. A prime capacity lets every probe sequence
    /// visit every slot.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity(capacity));
        }
        Ok(OpenAddressTable {
            store: BucketStore::with_slots(capacity),
        })
    }

    /// The slots `key` is looked up in, in order.
    pub fn probe(&self, key: &K) -> Probe {
        Probe::new(hash_code(key), self.store.capacity())
    }

    /// The index of the slot holding `key`, if any.
    fn find(&self, key: &K) -> Option<usize> {
        for index in self.probe(key) {
            match self.store.slot(index) {
                Slot::Empty => return None,
                Slot::Tombstone => {}
                Slot::Occupied(k, _) => {
                    if k == key {
                        return Some(index);
                    }
                }
            }
        }
        None
    }

    /// The number of slots left behind by deletions since the last `clear`.
    pub fn tombstones(&self) -> usize {
        self.store
            .iter()
            .filter(|slot| matches!(slot, Slot::Tombstone))
            .count()
    }
}

impl<K, V> Default for OpenAddressTable<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> HashTable<K, V> for OpenAddressTable<K, V>
where
    K: Hash + Eq,
{
    fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let mut vacant: Option<usize> = None;
        for index in self.probe(&key) {
            match self.store.slot_mut(index) {
                Slot::Empty => {
                    vacant.get_or_insert(index);
                    break;
                }
                Slot::Tombstone => {
                    vacant.get_or_insert(index);
                }
                Slot::Occupied(k, v) => {
                    if *k == key {
                        return Ok(Some(mem::replace(v, value)));
                    }
                }
            }
        }

        match vacant {
            Some(index) => {
                *self.store.slot_mut(index) = Slot::Occupied(key, value);
                self.store.increment();
                Ok(None)
            }
            None => {
                warn!(
                    "open-address table overflow: {} of {} slots in use",
                    self.store.count(),
                    self.store.capacity()
                );
                Err(TableError::Overflow {
                    capacity: self.store.capacity(),
                })
            }
        }
    }

    fn search(&self, key: &K) -> Option<&V> {
        match self.store.slot(self.find(key)?) {
            Slot::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        let index: usize = self.find(key)?;
        match mem::replace(self.store.slot_mut(index), Slot::Tombstone) {
            Slot::Occupied(_, value) => {
                self.store.decrement();
                Some(value)
            }
            other => {
                *self.store.slot_mut(index) = other;
                None
            }
        }
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        self.store
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied(key, value) => Some((key, value)),
                _ => None,
            })
            .collect()
    }

    #[inline]
    fn size(&self) -> usize {
        self.store.count()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.store.capacity()
    }

    fn load_factor(&self) -> f64 {
        self.store.load_factor()
    }

    fn clear(&mut self) {
        self.store.clear();
    }
}
