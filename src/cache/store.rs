//! Cache Store Module
//!
//! The synchronous map engine: a HashMap of entries plus the default TTL and
//! performance counters. Thread safety and the background sweep live one
//! layer up, in [`crate::cache::Cache`].

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats, Expiration, StatsSnapshot};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Key-value storage with per-entry TTL.
///
/// Reads never mutate the map: an expired-but-unswept entry is reported as
/// absent but stays in storage until [`CacheStore::purge_expired`], `delete`,
/// or an overwrite removes it.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Default TTL applied to `Expiration::Default` writes, None = no expiration
    default_ttl: Option<Duration>,
    /// Performance counters
    stats: CacheStats,
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given default TTL.
    ///
    /// A zero default TTL is normalized to "no expiration": entries written
    /// with `Expiration::Default` then never expire.
    pub fn new(default_ttl: Option<Duration>) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl: default_ttl.filter(|ttl| !ttl.is_zero()),
            stats: CacheStats::new(),
        }
    }

    // == Set ==
    /// Stores a key-value pair, replacing any existing entry for the key
    /// regardless of its expiration state.
    pub fn set(&mut self, key: String, value: V, expiration: Expiration) {
        self.insert_entry(key, value, expiration);
    }

    // == Add ==
    /// Inserts a key-value pair only if no live entry exists for the key.
    ///
    /// An expired-but-unswept entry counts as absent and is overwritten.
    ///
    /// # Errors
    /// Returns [`CacheError::AlreadyExists`] when a live entry blocks the
    /// insert; the existing entry is left untouched.
    pub fn add(&mut self, key: String, value: V, expiration: Expiration) -> Result<()> {
        let live = self.entries.get(&key).map_or(false, |entry| !entry.is_expired());
        if live {
            return Err(CacheError::AlreadyExists(key));
        }

        self.insert_entry(key, value, expiration);
        Ok(())
    }

    // == Replace ==
    /// Overwrites the entry for a key only if a live entry currently exists.
    ///
    /// # Errors
    /// Returns [`CacheError::NotFound`] when the key is absent or its entry
    /// has expired. A failed replace does not remove an expired entry.
    pub fn replace(&mut self, key: String, value: V, expiration: Expiration) -> Result<()> {
        let live = self.entries.get(&key).map_or(false, |entry| !entry.is_expired());
        if !live {
            return Err(CacheError::NotFound(key));
        }

        self.insert_entry(key, value, expiration);
        Ok(())
    }

    /// Resolves the expiration and writes the entry.
    fn insert_entry(&mut self, key: String, value: V, expiration: Expiration) {
        let expires_at = expiration.resolve(self.default_ttl);
        self.entries.insert(key, CacheEntry::new(value, expires_at));
    }

    // == TTL Remaining ==
    /// Returns the remaining time to live for a live entry, `None` meaning
    /// the entry never expires.
    ///
    /// # Errors
    /// Returns [`CacheError::NotFound`] when the key is absent or expired.
    pub fn ttl_remaining(&self, key: &str) -> Result<Option<Duration>> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => Ok(entry.ttl_remaining()),
            _ => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Delete ==
    /// Removes an entry by key. A no-op if the key is absent.
    pub fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }

    // == Flush ==
    /// Removes all entries, live or expired. A no-op if already empty.
    pub fn flush(&mut self) {
        self.entries.clear();
    }

    // == Purge Expired ==
    /// Removes every expired entry, evaluating the whole map against a
    /// single timestamp. Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));

        let removed = before - self.entries.len();
        self.stats.record_swept(removed as u64);
        removed
    }

    // == Length ==
    /// Returns the number of map entries, including expired-but-unswept
    /// ones. This reflects storage, not the logical live set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the performance counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.entries.len())
    }
}

impl<V: Clone> CacheStore<V> {
    // == Get ==
    /// Looks up a live entry by key and returns a clone of its value.
    ///
    /// Expired-but-unswept entries are reported as absent but are not
    /// removed; removal is the sweeper's or an explicit `delete`'s job.
    ///
    /// # Errors
    /// Returns [`CacheError::NotFound`] when the key is absent or expired.
    pub fn get(&self, key: &str) -> Result<V> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.stats.record_hit();
                Ok(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                Err(CacheError::NotFound(key.to_string()))
            }
        }
    }
}
