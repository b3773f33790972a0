//! Size measures for cached values.
//!
//! The cache enforces `sum(size(entry)) <= max_size`. `store` asks the
//! cache's measure for a value's size; `store_with_size` bypasses it.
//! [`UnitMeasure`] is the default, so `max_size` is simply an entry count.
//!
//! ```
//! use cache_walk::cache::{ByteMeasure, NamedCache};
//!
//! // Cap at 1 KiB of payload bytes.
//! let mut cache: NamedCache<Vec<u8>, ByteMeasure> = NamedCache::with_measure(1024, ByteMeasure);
//! cache.store(vec![0u8; 512], "blob");
//! assert_eq!(cache.current_size(), 512);
//! ```

/// Computes the size a value is charged against the cache ceiling.
pub trait SizeMeasure<T> {
    fn measure(&self, value: &T) -> u64;
}

/// Every value costs exactly 1 unit. This is the default measure.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitMeasure;

impl<T> SizeMeasure<T> for UnitMeasure {
    #[inline]
    fn measure(&self, _value: &T) -> u64 {
        1
    }
}

/// Charges the byte length of the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteMeasure;

impl<T: AsRef<[u8]>> SizeMeasure<T> for ByteMeasure {
    #[inline]
    fn measure(&self, value: &T) -> u64 {
        value.as_ref().len() as u64
    }
}

/// A measure backed by a closure.
#[derive(Clone, Copy)]
pub struct FnMeasure<F>(pub F);

impl<T, F> SizeMeasure<T> for FnMeasure<F>
where
    F: Fn(&T) -> u64,
{
    #[inline]
    fn measure(&self, value: &T) -> u64 {
        (self.0)(value)
    }
}
