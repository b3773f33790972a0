//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with request-order tracking
//! and a size ceiling.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats, RecencyIndex, SizeMeasure, UnitMeasure};
use crate::config::CacheConfig;

// == Named Cache ==
/// String-keyed cache bounded by the summed size of its entries.
///
/// When a store pushes the total above `max_size`, entries are evicted in
/// ascending order of their last request until the total fits again (or the
/// cache is empty).
#[derive(Debug)]
pub struct NamedCache<T, M = UnitMeasure> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<T>>,
    /// Request order for eviction
    recency: RecencyIndex,
    /// Performance statistics
    stats: CacheStats,
    /// Sum of all entry sizes, wide enough that it cannot overflow
    stored_size: u128,
    /// Size ceiling
    max_size: u64,
    /// Next request tick
    clock: u64,
    /// Sizes values passed to `store`
    measure: M,
}

impl<T> NamedCache<T, UnitMeasure> {
    // == Constructor ==
    /// Creates a cache where every `store` costs one unit.
    ///
    /// # Arguments
    /// * `max_size` - Ceiling for the summed entry sizes
    pub fn new(max_size: u64) -> Self {
        Self::with_measure(max_size, UnitMeasure)
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_size)
    }
}

impl<T, M: SizeMeasure<T>> NamedCache<T, M> {
    /// Creates a cache that sizes stored values with `measure`.
    ///
    /// # Arguments
    /// * `max_size` - Ceiling for the summed entry sizes
    /// * `measure` - Size function used by [`NamedCache::store`]
    pub fn with_measure(max_size: u64, measure: M) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyIndex::new(),
            stats: CacheStats::new(),
            stored_size: 0,
            max_size,
            clock: 0,
            measure,
        }
    }

    // == Contains ==
    /// Returns true if an entry exists for `key`. Does not count as a request.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Store ==
    /// Stores `value` under `key`, sized by the cache's measure.
    pub fn store(&mut self, value: T, key: impl Into<String>) {
        let size = self.measure.measure(&value);
        self.store_with_size(value, key, size);
    }

    /// Stores `value` under `key` with an explicit size.
    ///
    /// An existing entry for the key is replaced and its size released first.
    /// The entry becomes the most recently requested, then eviction runs.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `key` - The key to store it under
    /// * `size` - Size counted against `max_size`
    pub fn store_with_size(&mut self, value: T, key: impl Into<String>, size: u64) {
        let key = key.into();
        let tick = self.next_tick();

        if let Some(previous) = self.entries.remove(&key) {
            self.stored_size -= u128::from(previous.size);
            self.recency.remove(previous.last_request);
        }

        if size > self.max_size {
            warn!(
                key = %key,
                size,
                max_size = self.max_size,
                "entry exceeds the cache ceiling on its own and will be evicted"
            );
        }

        self.stored_size += u128::from(size);
        self.recency.insert(tick, key.clone());
        self.entries.insert(key, CacheEntry::new(value, size, tick));

        self.enforce_limit();
    }

    // == Get ==
    /// Borrows the value for `key`, marking it as most recently requested.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let tick = self.clock;
        match self.entries.get_mut(key) {
            Some(entry) => {
                self.clock += 1;
                let previous = entry.touch(tick);
                self.recency.touch(previous, tick);
                self.stats.record_hit();
                Some(&entry.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Retrieve ==
    /// Returns a copy of the value for `key`, or `T::default()` when absent.
    ///
    /// A miss is not an error and leaves the cache untouched apart from the
    /// miss counter.
    pub fn retrieve(&mut self, key: &str) -> T
    where
        T: Clone + Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }

    // == Peek ==
    /// Borrows the value for `key` without counting a request.
    pub fn peek(&self, key: &str) -> Option<&T> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    /// Returns the stored entry with its size and last request tick.
    pub fn entry(&self, key: &str) -> Option<&CacheEntry<T>> {
        self.entries.get(key)
    }

    // == Erase ==
    /// Removes the entry for `key`, releasing its size.
    ///
    /// Returns the removed value; erasing an absent key is a no-op.
    pub fn erase(&mut self, key: &str) -> Option<T> {
        let entry = self.entries.remove(key)?;
        self.recency.remove(entry.last_request);
        self.stored_size -= u128::from(entry.size);
        Some(entry.value)
    }

    // == Size Ceiling ==
    /// Updates the size ceiling.
    ///
    /// Nothing is evicted until the next store or [`NamedCache::enforce_limit`].
    pub fn set_max_size(&mut self, max_size: u64) {
        self.max_size = max_size;
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Returns the summed size of all entries, clamped to `u64::MAX`.
    pub fn current_size(&self) -> u64 {
        u64::try_from(self.stored_size).unwrap_or(u64::MAX)
    }

    // == Enforce Limit ==
    /// Evicts least recently requested entries until the stored size fits
    /// the ceiling or the cache is empty.
    ///
    /// Returns the number of entries evicted.
    pub fn enforce_limit(&mut self) -> usize {
        let mut evicted = 0;

        while self.stored_size > u128::from(self.max_size) {
            let key = match self.recency.pop_oldest() {
                Some((_, key)) => key,
                None => break,
            };

            if let Some(entry) = self.entries.remove(&key) {
                self.stored_size -= u128::from(entry.size);
                self.stats.record_eviction();
                evicted += 1;
                debug!(key = %key, size = entry.size, "evicted least recently requested entry");
            }
        }

        evicted
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            stored_size: self.current_size(),
            max_size: self.max_size,
            ..self.stats.clone()
        }
    }

    /// Removes every entry. Statistics and the request clock are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
        self.stored_size = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn next_tick(&mut self) -> u64 {
        let tick = self.clock;
        self.clock += 1;
        tick
    }
}
