//! Separate chaining: each slot owns a singly linked chain of entries.
//!
//! The index of a key is computed by a pluggable [`SlotHasher`]. [`ChainedTable`] uses
//! multiply-shift hashing by default, [`UniversalTable`] plugs in a randomly parameterized
//! universal hash. Both grow by doubling and rehashing every entry once the load factor exceeds
//! 3/4, and neither ever shrinks.

use crate::error::{Result, TableError};
use crate::hash::{hash_code, Multiplicative, SlotHasher, Universal};
use crate::store::BucketStore;
use crate::table::HashTable;
use crate::DEFAULT_CAPACITY;
use log::debug;
use std::hash::Hash;
use std::mem;
use std::time::Instant;

/// Chained tables hold between `2^MIN_BITS` and `2^MAX_BITS` slots.
pub const MIN_BITS: u32 = 0;
pub const MAX_BITS: u32 = 31;

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    next: Link<K, V>,
}

#[derive(Debug, Clone)]
pub struct ChainedTable<K, V, H = Multiplicative> {
    bits: u32,
    store: BucketStore<Link<K, V>>,
    hasher: H,
}

/// A chained table whose hash function is picked at random when it is built.
pub type UniversalTable<K, V> = ChainedTable<K, V, Universal>;

impl<K, V> ChainedTable<K, V, Multiplicative>
where
    K: Hash + Eq,
{
    /// An empty table of 16 slots.
    pub fn new() -> Self {
        Self::build(DEFAULT_CAPACITY, Multiplicative)
    }

    /// An empty table holding the largest power of two slots not above `capacity`.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity, Multiplicative)
    }
}

impl<K, V> Default for ChainedTable<K, V, Multiplicative>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ChainedTable<K, V, Universal>
where
    K: Hash + Eq,
{
    /// An empty table of 16 slots with freshly drawn hash parameters.
    pub fn randomized() -> Self {
        Self::build(DEFAULT_CAPACITY, Universal::random())
    }

    /// An empty table whose hash parameters are derived from `seed`, so that two tables built
    /// from the same seed place every key in the same slot.
    pub fn with_seed(capacity: usize, seed: u64) -> Result<Self> {
        Self::with_hasher(capacity, Universal::from_seed(seed))
    }

    pub fn seed(&self) -> u64 {
        self.hasher.seed()
    }
}

impl<K, V, H> ChainedTable<K, V, H>
where
    K: Hash + Eq,
    H: SlotHasher,
{
    pub fn with_hasher(capacity: usize, hasher: H) -> Result<Self> {
        if capacity == 0 {
            return Err(TableError::InvalidCapacity(capacity));
        }
        Ok(Self::build(capacity, hasher))
    }

    fn build(capacity: usize, hasher: H) -> Self {
        // floor(log2(capacity))
        let bits: u32 = (usize::BITS - 1 - capacity.leading_zeros())
            .min(MAX_BITS)
            .max(MIN_BITS);
        ChainedTable {
            bits,
            store: BucketStore::with_slots(1 << bits),
            hasher,
        }
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// The slot `key` lives in, always in `[0, capacity)`.
    #[inline]
    pub fn slot_of(&self, key: &K) -> usize {
        self.hasher.slot(hash_code(key), self.bits)
    }

    /// Doubles the number of slots and moves every node into its new chain.
    fn grow(&mut self) {
        if self.bits >= MAX_BITS {
            return;
        }
        let now: Instant = Instant::now();
        let old_capacity: usize = self.store.capacity();
        self.bits += 1;
        let old: Vec<Link<K, V>> = self.store.reallocate(1 << self.bits);
        let mut chain: Vec<Box<Node<K, V>>> = Vec::new();
        for mut link in old {
            while let Some(mut node) = link {
                link = node.next.take();
                chain.push(node);
            }
            // Relink oldest first so every new chain stays most recent first.
            while let Some(mut node) = chain.pop() {
                let index: usize = self.slot_of(&node.key);
                let head: &mut Link<K, V> = self.store.slot_mut(index);
                node.next = head.take();
                *head = Some(node);
            }
        }
        debug!(
            "grew chained table from {} to {} slots ({} entries) in {:?}",
            old_capacity,
            self.store.capacity(),
            self.store.count(),
            now.elapsed()
        );
    }
}

impl<K, V, H> HashTable<K, V> for ChainedTable<K, V, H>
where
    K: Hash + Eq,
    H: SlotHasher,
{
    fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let index: usize = self.slot_of(&key);
        let head: &mut Link<K, V> = self.store.slot_mut(index);

        let mut cursor: Option<&mut Node<K, V>> = head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Ok(Some(mem::replace(&mut node.value, value)));
            }
            cursor = node.next.as_deref_mut();
        }

        let next: Link<K, V> = head.take();
        *head = Some(Box::new(Node { key, value, next }));
        self.store.increment();
        if self.store.exceeds_max_load() {
            self.grow();
        }
        Ok(None)
    }

    fn search(&self, key: &K) -> Option<&V> {
        let mut cursor: Option<&Node<K, V>> = self.store.slot(self.slot_of(key)).as_deref();
        while let Some(node) = cursor {
            if node.key == *key {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    fn delete(&mut self, key: &K) -> Option<V> {
        let index: usize = self.slot_of(key);
        let mut link: &mut Link<K, V> = self.store.slot_mut(index);
        while link.as_ref().map_or(false, |node| node.key != *key) {
            link = &mut link.as_mut()?.next;
        }
        let mut node: Box<Node<K, V>> = link.take()?;
        *link = node.next.take();
        self.store.decrement();
        Some(node.value)
    }

    fn entries(&self) -> Vec<(&K, &V)> {
        let mut entries: Vec<(&K, &V)> = Vec::with_capacity(self.store.count());
        for head in self.store.iter() {
            let mut cursor: Option<&Node<K, V>> = head.as_deref();
            while let Some(node) = cursor {
                entries.push((&node.key, &node.value));
                cursor = node.next.as_deref();
            }
        }
        entries
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
