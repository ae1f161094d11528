//! Expiry Sweep Task
//!
//! Background task that periodically purges expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::driver::Driver;

/// Spawns a background task that periodically purges expired entries.
///
/// The task sleeps for `interval_secs` between runs and calls
/// [`Driver::purge_expired`]. An `interval_secs` of 0 is treated as 1 so
/// the task never spins; callers that want no sweeping should not spawn it.
/// It runs until the returned handle is aborted. Must be called from within
/// a tokio runtime.
///
/// # Example
/// ```ignore
/// let handle = spawn_sweep_task(cache.driver(), 60);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_sweep_task(driver: Arc<dyn Driver>, interval_secs: u64) -> JoinHandle<()> {
    let interval = sweep_interval(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting expiry sweep task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = driver.purge_expired();

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}

/// Sleep between sweeps, at least one second.
fn sweep_interval(interval_secs: u64) -> Duration {
    Duration::from_secs(interval_secs.max(1))
}
