//! The slot array shared by every table, together with its size bookkeeping and load-factor policy.

use std::mem;
use std::slice;

/// A fixed-length vector of slots plus the number of live entries stored in them.
///
/// What a slot holds is up to the table: a chain head for separate chaining, a single entry for
/// open addressing.
#[derive(Debug, Clone)]
pub struct BucketStore<S>
where
    S: Default,
{
    count: usize,
    slots: Vec<S>,
}

impl<S> BucketStore<S>
where
    S: Default,
{
    /// The maximum load factor, 3/4, as a ratio of integers.
    pub const MAX_LOAD_NUMERATOR: usize = 3;
    pub const MAX_LOAD_DENOMINATOR: usize = 4;

    /// `capacity` must be at least 1; the tables reject zero before building a store.
    pub fn with_slots(capacity: usize) -> Self {
        BucketStore {
            count: 0,
            slots: Self::empty_slots(capacity),
        }
    }

    fn empty_slots(capacity: usize) -> Vec<S> {
        let mut slots: Vec<S> = Vec::with_capacity(capacity);
        slots.resize_with(capacity, S::default);
        slots
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Is the load factor strictly greater than 3/4?
    #[inline]
    pub fn exceeds_max_load(&self) -> bool {
        self.count * Self::MAX_LOAD_DENOMINATOR > self.capacity() * Self::MAX_LOAD_NUMERATOR
    }

    #[inline]
    pub fn slot(&self, index: usize) -> &S {
        &self.slots[index]
    }

    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> &mut S {
        &mut self.slots[index]
    }

    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.slots.iter()
    }

    #[inline]
    pub fn increment(&mut self) {
        self.count += 1;
    }

    #[inline]
    pub fn decrement(&mut self) {
        self.count -= 1;
    }

    /// Swaps in `capacity` empty slots and hands back the old ones. The count is left untouched,
    /// the caller is expected to move every entry over.
    pub fn reallocate(&mut self, capacity: usize) -> Vec<S> {
        mem::replace(&mut self.slots, Self::empty_slots(capacity))
    }

    /// Empties every slot without changing the capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = S::default();
        }
        self.count = 0;
    }
}
