//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheStats {
    /// Number of requests that found their key
    pub hits: u64,
    /// Number of requests for absent keys
    pub misses: u64,
    /// Number of entries evicted to satisfy the size ceiling
    pub evictions: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Summed size of all entries
    pub stored_size: u64,
    /// Configured size ceiling
    pub max_size: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Counts a request that found its key.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Counts a request for an absent key.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Counts one entry evicted to satisfy the size ceiling.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}
