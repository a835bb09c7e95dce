//! TTL Sweeper Task
//!
//! Background task that periodically removes expired cache entries. One
//! sweeper runs per cache instance; it is spawned at construction and torn
//! down through [`SweeperHandle::stop`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

// == Sweeper Handle ==
/// Handle to a running sweeper task: the shutdown signal plus the task
/// itself, so a stop can wait for the task to fully exit.
#[derive(Debug)]
pub struct SweeperHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// Signals the sweeper to terminate and waits until it has exited.
    ///
    /// The task observes the signal at its next wake point (tick or signal,
    /// whichever comes first); its critical sections are bounded, so no
    /// forced abort is needed.
    pub async fn stop(self) {
        // A send error means the task already exited on its own
        let _ = self.shutdown.send(());

        if let Err(err) = self.task.await {
            warn!(%err, "sweeper task did not exit cleanly");
        }
    }
}

// == Spawn ==
/// Spawns a background task that sweeps expired entries every `interval`.
///
/// Each sweep acquires the write lock, scans every entry against a single
/// timestamp, removes the expired ones, and releases the lock before waiting
/// for the next tick. The scan is O(n) per tick, which is fine for the
/// coarse-grained intervals this is meant for.
///
/// # Arguments
/// * `store` - shared reference to the cache store
/// * `interval` - period between sweeps; must be non-zero
///
/// # Returns
/// A [`SweeperHandle`] used to stop the task and wait for its exit.
pub fn spawn_sweeper<V>(store: Arc<RwLock<CacheStore<V>>>, interval: Duration) -> SweeperHandle
where
    V: Send + Sync + 'static,
{
    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "sweeper started");

        let mut ticker = tokio::time::interval(interval);
        // The first interval tick completes immediately; consume it so the
        // first sweep happens one full period after construction.
        ticker.tick().await;

        loop {
            tokio::select! {
                // Also fires on a dropped sender, so a cache discarded
                // without stop() does not strand its sweeper
                _ = &mut shutdown_rx => {
                    info!("sweeper stopped");
                    return;
                }
                _ = ticker.tick() => {
                    let removed = store.write().await.purge_expired();
                    if removed > 0 {
                        debug!(removed, "sweep removed expired entries");
                    }
                }
            }
        }
    });

    SweeperHandle {
        shutdown: shutdown_tx,
        task,
    }
}
