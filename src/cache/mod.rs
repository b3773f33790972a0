//! Cache Module
//!
//! Provides a string-keyed cache bounded by the summed size of its entries,
//! evicting least recently requested entries first.

mod entry;
mod measure;
mod recency;
mod stats;
mod store;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::CacheEntry;
pub use measure::{ByteMeasure, FnMeasure, SizeMeasure, UnitMeasure};
pub(crate) use recency::RecencyIndex;
pub use stats::CacheStats;
pub use store::NamedCache;

/// A cache behind an async read-write lock for use across tasks.
///
/// Requests refresh recency, so `get` and `retrieve` need the write half.
pub type SharedCache<T, M = UnitMeasure> = Arc<RwLock<NamedCache<T, M>>>;

/// Wraps a cache for shared access.
pub fn shared<T, M>(cache: NamedCache<T, M>) -> SharedCache<T, M> {
    Arc::new(RwLock::new(cache))
}
