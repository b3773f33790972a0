//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with size and recency metadata.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// Declared size counted against the cache ceiling
    pub size: u64,
    /// Tick of the most recent store or retrieve
    pub last_request: u64,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `size` - Size counted against the cache ceiling
    /// * `tick` - Request tick at which the entry was stored
    pub fn new(value: T, size: u64, tick: u64) -> Self {
        Self {
            value,
            size,
            last_request: tick,
        }
    }

    // == Touch ==
    /// Records a request at `tick`, returning the previous tick.
    pub fn touch(&mut self, tick: u64) -> u64 {
        std::mem::replace(&mut self.last_request, tick)
    }
}
