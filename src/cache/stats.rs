//! Cache Statistics Module
//!
//! Tracks cache performance counters: hits, misses, and entries removed by
//! sweeps. Counters are atomic so lookups can record them while holding only
//! the read lock.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Cache Stats ==
/// Internal performance counters, updated by the store.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of successful lookups
    hits: AtomicU64,
    /// Number of failed lookups (key absent or expired)
    misses: AtomicU64,
    /// Number of entries removed by sweeps
    swept: AtomicU64,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds to the swept-entries counter.
    pub fn record_swept(&self, count: u64) {
        self.swept.fetch_add(count, Ordering::Relaxed);
    }

    /// Takes a point-in-time snapshot of the counters.
    pub fn snapshot(&self, total_entries: usize) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            swept: self.swept.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Stats Snapshot ==
/// A point-in-time copy of the cache counters, serializable for callers that
/// export metrics themselves.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    /// Number of successful lookups
    pub hits: u64,
    /// Number of failed lookups (key absent or expired)
    pub misses: u64,
    /// Number of entries removed by sweeps
    pub swept: u64,
    /// Current number of map entries, including expired-but-unswept ones
    pub total_entries: usize,
}

impl StatsSnapshot {
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
