//! Expiry Sweeper Task
//!
//! Background task that periodically removes cache entries older than
//! their group's TTL, independent of access patterns.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns the periodic expiry sweep over the response cache.
///
/// The task loops forever, sleeping for the configured interval and
/// then removing every expired entry under the cache's write lock.
/// The returned `JoinHandle` is the task's off switch: the shutdown
/// path (and tests) abort it instead of leaking a timer.
///
/// # Arguments
/// * `cache` - Shared handle to the response cache
/// * `interval_secs` - Seconds between sweep runs
pub fn spawn_sweeper_task(cache: SharedCache, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "starting expiry sweeper with an interval of {} seconds",
            interval_secs
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!("expiry sweep removed {} stale entries", removed);
            } else {
                debug!("expiry sweep found nothing stale");
            }
        }
    })
}
