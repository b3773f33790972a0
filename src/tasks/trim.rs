//! Cache Trim Task
//!
//! Background task that periodically enforces the size ceiling of a shared
//! cache, so a lowered `set_max_size` takes effect without waiting for the
//! next store.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{SharedCache, SizeMeasure};

/// Spawns a background task that periodically trims a shared cache.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between runs. It acquires a write lock on the cache to evict entries.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `trim_interval_secs` - Interval in seconds between trim runs, at least 1
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort it.
///
/// # Example
/// ```ignore
/// let cache = shared(NamedCache::<String>::new(1000));
/// let trim_handle = spawn_trim_task(cache.clone(), 1);
/// // Later:
/// trim_handle.abort();
/// ```
pub fn spawn_trim_task<T, M>(cache: SharedCache<T, M>, trim_interval_secs: u64) -> JoinHandle<()>
where
    T: Send + Sync + 'static,
    M: SizeMeasure<T> + Send + Sync + 'static,
{
    let interval = trim_interval(trim_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache trim task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let (evicted, stored_size) = {
                let mut cache_guard = cache.write().await;
                let evicted = cache_guard.enforce_limit();
                (evicted, cache_guard.current_size())
            };

            if evicted > 0 {
                info!(
                    "Cache trim: evicted {} entries, stored size now {}",
                    evicted, stored_size
                );
            } else {
                debug!("Cache trim: within size ceiling");
            }
        }
    })
}

/// Interval between trim runs; zero is raised to one second.
fn trim_interval(trim_interval_secs: u64) -> Duration {
    Duration::from_secs(trim_interval_secs.max(1))
}
