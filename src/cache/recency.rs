//! Recency Index Module
//!
//! Orders keys by their last request tick for least-recently-requested eviction.

use std::collections::BTreeMap;

// == Recency Index ==
/// Tracks request order for eviction.
///
/// Keys are stored in a BTreeMap keyed by request tick where:
/// - First = Least recently requested
/// - Last = Most recently requested
///
/// Ticks are issued by the owning cache and never repeat, so each tick maps
/// to exactly one key.
#[derive(Debug, Default)]
pub struct RecencyIndex {
    /// Keys by request tick
    order: BTreeMap<u64, String>,
}

impl RecencyIndex {
    // == Constructor ==
    /// Creates a new empty index.
    pub fn new() -> Self {
        Self {
            order: BTreeMap::new(),
        }
    }

    // == Insert ==
    /// Records `key` as requested at `tick`.
    pub fn insert(&mut self, tick: u64, key: String) {
        self.order.insert(tick, key);
    }

    // == Touch ==
    /// Moves a key from its previous tick to `tick`.
    pub fn touch(&mut self, previous: u64, tick: u64) {
        if let Some(key) = self.order.remove(&previous) {
            self.order.insert(tick, key);
        }
    }

    // == Remove ==
    /// Forgets the key recorded at `tick`.
    pub fn remove(&mut self, tick: u64) -> Option<String> {
        self.order.remove(&tick)
    }

    // == Pop Oldest ==
    /// Returns and removes the least recently requested key.
    ///
    /// Returns None if the index is empty.
    pub fn pop_oldest(&mut self) -> Option<(u64, String)> {
        self.order.pop_first()
    }

    // == Peek Oldest ==
    /// Returns the least recently requested key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.values().next()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}
