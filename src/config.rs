//! Configuration Module
//!
//! Cache construction parameters with sensible defaults and environment
//! overrides.

use std::env;
use std::time::Duration;

/// Cache construction parameters.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Default TTL applied to writes that request it, None = no expiration
    pub default_ttl: Option<Duration>,
    /// Period between background sweeps, None = no automatic sweeping
    pub sweep_interval: Option<Duration>,
}

impl CacheConfig {
    /// Creates a CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL_MS` - default TTL in milliseconds, 0 = no
    ///   expiration (default: 0)
    /// - `CACHE_SWEEP_INTERVAL_MS` - sweep period in milliseconds, 0 = no
    ///   automatic sweeping (default: 1000)
    pub fn from_env() -> Self {
        Self {
            default_ttl: duration_ms_var("CACHE_DEFAULT_TTL_MS", None),
            sweep_interval: duration_ms_var(
                "CACHE_SWEEP_INTERVAL_MS",
                Some(Duration::from_secs(1)),
            ),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: None,
            sweep_interval: Some(Duration::from_secs(1)),
        }
    }
}

/// Reads a millisecond duration from the environment; an explicit 0 disables
/// the setting, an absent or unparseable value falls back to the default.
fn duration_ms_var(name: &str, default: Option<Duration>) -> Option<Duration> {
    match env::var(name).ok().and_then(|v| v.parse::<u64>().ok()) {
        Some(0) => None,
        Some(ms) => Some(Duration::from_millis(ms)),
        None => default,
    }
}
