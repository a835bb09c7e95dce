//! Background Tasks Module
//!
//! Contains background tasks tied to a cache instance's lifetime.
//!
//! # Tasks
//! - TTL Sweeper: removes expired cache entries at a configured interval

mod sweeper;

pub use sweeper::{spawn_sweeper, SweeperHandle};
