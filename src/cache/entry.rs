//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and the expiration
//! variants accepted by the write operations.

use std::time::{Duration, Instant};

// == Expiration ==
/// Expiration requested for an entry at insertion time.
///
/// Passed alongside the value on every write (`set`, `add`, `replace`).
/// `Default` resolves to the cache's configured default TTL; `Never` keeps
/// the entry until it is explicitly removed; `After(d)` expires the entry
/// once `d` has elapsed. `After(Duration::ZERO)` degenerates to no
/// expiration tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    /// Use the cache's configured default TTL
    Default,
    /// The entry never expires
    Never,
    /// The entry expires after the given duration
    After(Duration),
}

impl Expiration {
    /// Resolves the requested expiration against the cache default into an
    /// absolute deadline. `None` means the entry never expires.
    pub(crate) fn resolve(self, default_ttl: Option<Duration>) -> Option<Instant> {
        let ttl = match self {
            Expiration::Default => default_ttl,
            Expiration::Never => None,
            Expiration::After(d) if d.is_zero() => None,
            Expiration::After(d) => Some(d),
        };

        ttl.map(|d| Instant::now() + d)
    }
}

// == Cache Entry ==
/// A stored value together with its optional absolute expiration deadline.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute deadline, None = no expiration
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    /// Creates a new cache entry with an optional deadline.
    pub fn new(value: V, expires_at: Option<Instant>) -> Self {
        Self { value, expires_at }
    }

    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its deadline.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Checks expiry against a caller-supplied timestamp, so a full-map scan
    /// can evaluate every entry against the same instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }

    /// Returns the remaining time to live.
    ///
    /// # Returns
    /// - `Some(Duration::ZERO)` if the entry has expired
    /// - `Some(remaining)` if the entry has a deadline and hasn't expired
    /// - `None` if the entry never expires
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}
