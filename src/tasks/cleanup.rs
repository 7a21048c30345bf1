//! Cache Sweep Task
//!
//! Background task that periodically removes expired cache entries. Lookup
//! already evicts lazily; the sweep covers keys that are never queried again
//! after expiring.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// # Arguments
/// * `cache` - Shared reference to the response cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(
    cache: Arc<RwLock<ResponseCache>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting cache sweep task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, stats) = {
                let mut cache_guard = cache.write().await;
                (cache_guard.cleanup_expired(), cache_guard.stats())
            };

            if removed > 0 {
                info!(
                    removed,
                    entries = stats.total_entries,
                    hit_rate = stats.hit_rate(),
                    "Cache sweep removed expired entries"
                );
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
