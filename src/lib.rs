//! A lightweight thread-safe in-memory cache with per-entry TTL expiration.
//!
//! Entries acquire an absolute expiration deadline when written and are
//! reclaimed by a background sweeper; reads treat expired-but-unswept
//! entries as absent without removing them.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ttl_cache::{Cache, Expiration};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // 5 minute default TTL, sweep every second
//!     let cache: Cache<String> = Cache::new(
//!         Some(Duration::from_secs(300)),
//!         Some(Duration::from_secs(1)),
//!     );
//!
//!     cache.set("greeting", "hello".to_string(), Expiration::Default).await;
//!     assert_eq!(cache.get("greeting").await.unwrap(), "hello");
//!
//!     // Release the sweeper before discarding the cache
//!     cache.stop().await;
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheEntry, CacheStore, Expiration, StatsSnapshot};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use tasks::{spawn_sweeper, SweeperHandle};
