//! The operations every table in this crate provides.

use crate::error::Result;

/// An associative array from `K` to `V`.
///
/// Absent keys are reported as `None`, never as an error. Iteration order is ascending slot
/// index; for chained tables entries sharing a slot come most recently inserted first.
pub trait HashTable<K, V> {
    /// Associates `value` with `key`, returning the value it replaces, if any.
    ///
    /// Fails only when the table has no room for a new key.
    fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>>;

    /// Like [`HashTable::try_insert`], but panics when the table is full.
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.try_insert(key, value) {
            Ok(previous) => previous,
            Err(failure) => panic!("{}", failure),
        }
    }

    fn search(&self, key: &K) -> Option<&V>;

    /// Removes the mapping for `key`, returning its value if it was present.
    fn delete(&mut self, key: &K) -> Option<V>;

    /// Every live (key, value) pair, in iteration order.
    fn entries(&self) -> Vec<(&K, &V)>;

    fn keys<'a>(&'a self) -> Vec<&'a K>
    where
        V: 'a,
    {
        self.entries().into_iter().map(|(key, _)| key).collect()
    }

    fn values<'a>(&'a self) -> Vec<&'a V>
    where
        K: 'a,
    {
        self.entries().into_iter().map(|(_, value)| value).collect()
    }

    fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// The number of stored pairs.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// The number of slots.
    fn capacity(&self) -> usize;

    fn load_factor(&self) -> f64 {
        self.size() as f64 / self.capacity() as f64
    }

    /// Removes every pair; the capacity is unchanged.
    fn clear(&mut self);
}
