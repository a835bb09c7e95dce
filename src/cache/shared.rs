//! Shared Cache Handle
//!
//! The public thread-safe cache: a [`CacheStore`] behind one reader/writer
//! lock, plus the lifecycle of the background sweeper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};

use crate::cache::{CacheStore, Expiration, StatsSnapshot};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::tasks::{spawn_sweeper, SweeperHandle};

// == Cache ==
/// Thread-safe in-memory cache with per-entry TTL.
///
/// All operations go through a single reader/writer lock: writes (`set`,
/// `add`, `replace`, `delete`, `flush`, sweeps) take it exclusively, reads
/// (`get`, `item_count`, `ttl_remaining`, `stats`) share it. Operations are
/// linearizable with respect to the lock; critical sections never block on
/// I/O.
///
/// A cache constructed with a sweep interval owns a background sweeper task
/// and must be released with [`Cache::stop`] before being discarded.
#[derive(Debug)]
pub struct Cache<V> {
    /// Shared store, the single unit of mutual exclusion
    store: Arc<RwLock<CacheStore<V>>>,
    /// Running sweeper, taken exactly once by stop()
    sweeper: Mutex<Option<SweeperHandle>>,
}

impl<V> Cache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates a new cache with the given default TTL and sweep interval.
    ///
    /// A `None` or zero `default_ttl` means entries written with
    /// [`Expiration::Default`] never expire. A `Some(interval)` with a
    /// non-zero interval starts a background sweeper on that period; with
    /// `None` (or zero) there is no automatic sweeping, and expired entries
    /// remain in the map, inflating [`Cache::item_count`], until read as
    /// absent, overwritten, or explicitly removed.
    ///
    /// Must be called from within a tokio runtime when a sweep interval is
    /// set, since the sweeper is spawned here.
    pub fn new(default_ttl: Option<Duration>, sweep_interval: Option<Duration>) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(default_ttl)));

        let sweeper = sweep_interval
            .filter(|interval| !interval.is_zero())
            .map(|interval| spawn_sweeper(Arc::clone(&store), interval));

        Self {
            store,
            sweeper: Mutex::new(sweeper),
        }
    }

    /// Creates a new cache from a [`CacheConfig`].
    pub fn with_config(config: &CacheConfig) -> Self {
        Self::new(config.default_ttl, config.sweep_interval)
    }

    // == Set ==
    /// Stores a key-value pair, replacing any existing entry for the key.
    pub async fn set(&self, key: impl Into<String>, value: V, expiration: Expiration) {
        self.store.write().await.set(key.into(), value, expiration);
    }

    // == Add ==
    /// Inserts a key-value pair only if no live entry exists for the key;
    /// an expired-but-unswept entry counts as absent.
    ///
    /// # Errors
    /// Returns [`crate::CacheError::AlreadyExists`] when a live entry blocks
    /// the insert, leaving the existing entry untouched.
    pub async fn add(&self, key: impl Into<String>, value: V, expiration: Expiration) -> Result<()> {
        self.store.write().await.add(key.into(), value, expiration)
    }

    // == Replace ==
    /// Overwrites the entry for a key only if a live entry currently exists.
    ///
    /// # Errors
    /// Returns [`crate::CacheError::NotFound`] when the key is absent or its
    /// entry has expired; no mutation occurs on failure.
    pub async fn replace(
        &self,
        key: impl Into<String>,
        value: V,
        expiration: Expiration,
    ) -> Result<()> {
        self.store.write().await.replace(key.into(), value, expiration)
    }

    // == Get ==
    /// Looks up a live entry and returns a clone of its value.
    ///
    /// The cache never deep-copies: to share a mutable payload between the
    /// cache and callers, store a shared handle such as `Arc<Mutex<T>>` as
    /// the value type, so the returned clone aliases the stored payload.
    ///
    /// Expired-but-unswept entries are reported as absent but left in the
    /// map; lookups take only the read lock and never remove anything.
    ///
    /// # Errors
    /// Returns [`crate::CacheError::NotFound`] when the key is absent or
    /// expired.
    pub async fn get(&self, key: &str) -> Result<V> {
        self.store.read().await.get(key)
    }

    // == TTL Remaining ==
    /// Returns the remaining time to live for a live entry, `None` meaning
    /// the entry never expires.
    ///
    /// # Errors
    /// Returns [`crate::CacheError::NotFound`] when the key is absent or
    /// expired.
    pub async fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        self.store.read().await.ttl_remaining(key)
    }

    // == Delete ==
    /// Removes an entry by key. A no-op if the key is absent.
    pub async fn delete(&self, key: &str) {
        self.store.write().await.delete(key);
    }

    // == Flush ==
    /// Removes all entries, live or expired.
    pub async fn flush(&self) {
        self.store.write().await.flush();
    }

    // == Item Count ==
    /// Returns the number of map entries, including expired-but-unswept
    /// ones: this reflects storage, not the logical live set, so the count
    /// stays a cheap read-lock operation.
    pub async fn item_count(&self) -> usize {
        self.store.read().await.len()
    }

    // == Stats ==
    /// Returns a snapshot of the hit/miss/sweep counters.
    pub async fn stats(&self) -> StatsSnapshot {
        self.store.read().await.stats()
    }

    // == Stop ==
    /// Stops the background sweeper and waits until it has fully exited.
    ///
    /// Required before discarding a cache constructed with a sweep interval.
    /// Safe to call more than once, and a no-op when no sweeper was started:
    /// the handle is taken exactly once, so repeated calls return
    /// immediately.
    pub async fn stop(&self) {
        let sweeper = self.sweeper.lock().await.take();
        if let Some(sweeper) = sweeper {
            sweeper.stop().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    #[tokio::test]
    async fn test_cache_set_and_get() {
        let cache: Cache<String> = Cache::new(None, None);

        cache.set("key1", "value1".to_string(), Expiration::Default).await;

        assert_eq!(cache.get("key1").await.unwrap(), "value1");
        assert_eq!(cache.item_count().await, 1);

        cache.stop().await;
    }

    #[tokio::test]
    async fn test_cache_get_not_found() {
        let cache: Cache<String> = Cache::new(None, None);

        let result = cache.get("missing").await;
        assert!(matches!(result, Err(CacheError::NotFound(key)) if key == "missing"));

        cache.stop().await;
    }

    #[tokio::test]
    async fn test_cache_stop_without_sweeper_is_noop() {
        let cache: Cache<String> = Cache::new(None, None);

        cache.stop().await;
        cache.stop().await;
    }

    #[tokio::test]
    async fn test_cache_double_stop_with_sweeper() {
        let cache: Cache<String> = Cache::new(None, Some(Duration::from_millis(10)));

        cache.stop().await;
        // Second stop finds no handle and returns immediately
        cache.stop().await;
    }

    #[tokio::test]
    async fn test_cache_concurrent_readers_and_writers() {
        let cache: Arc<Cache<u64>> = Arc::new(Cache::new(None, None));

        let mut handles = Vec::new();
        for i in 0..8u64 {
            let cache = Arc::clone(&cache);
            handles.push(tokio::spawn(async move {
                let key = format!("key{}", i % 4);
                cache.set(key.clone(), i, Expiration::Never).await;
                // Every read observes some complete prior write or nothing
                if let Ok(seen) = cache.get(&key).await {
                    assert!(seen < 8);
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(cache.item_count().await, 4);
        cache.stop().await;
    }
}
