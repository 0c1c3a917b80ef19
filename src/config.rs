//! Configuration Module
//!
//! Handles loading cache and demo host configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_FLUSH_INTERVAL, DEFAULT_MAX_SIZE};
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of keys tracked before LRU eviction kicks in
    pub max_size: usize,
    /// Time after which the whole cache is flushed on next access
    pub flush_interval: Duration,
}

impl CacheConfig {
    /// Creates a config with explicit values.
    pub fn new(max_size: usize, flush_interval: Duration) -> Self {
        Self {
            max_size,
            flush_interval,
        }
    }

    /// Loads values from environment variables, falling back to `defaults`
    /// for any that are missing or unparsable.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum tracked keys
    /// - `CACHE_FLUSH_INTERVAL_MS` - Flush interval in milliseconds
    pub fn from_env_or(defaults: Self) -> Self {
        Self {
            max_size: env_or("CACHE_MAX_SIZE", defaults.max_size),
            flush_interval: Duration::from_millis(env_or(
                "CACHE_FLUSH_INTERVAL_MS",
                defaults.flush_interval.as_millis() as u64,
            )),
        }
    }

    /// Checks that the configuration can drive a cache.
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than 0".to_string(),
            ));
        }
        if self.flush_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "flush_interval must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            flush_interval: DEFAULT_FLUSH_INTERVAL,
        }
    }
}

/// Configuration for the demo host binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    /// Cache settings used by the host
    pub cache: CacheConfig,
    /// How often the host adds a timestamp entry
    pub insert_interval: Duration,
    /// How often the clock task reports the current time
    pub tick_interval: Duration,
}

impl DemoConfig {
    /// Loads the demo configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum tracked keys (default: 5)
    /// - `CACHE_FLUSH_INTERVAL_MS` - Flush interval in milliseconds (default: 300000)
    /// - `DEMO_INSERT_INTERVAL_MS` - Insert frequency in milliseconds (default: 1000)
    /// - `DEMO_TICK_INTERVAL_MS` - Clock tick frequency in milliseconds (default: 60000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache: CacheConfig::from_env_or(defaults.cache),
            insert_interval: Duration::from_millis(env_or(
                "DEMO_INSERT_INTERVAL_MS",
                defaults.insert_interval.as_millis() as u64,
            )),
            tick_interval: Duration::from_millis(env_or(
                "DEMO_TICK_INTERVAL_MS",
                defaults.tick_interval.as_millis() as u64,
            )),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::new(5, Duration::from_secs(5 * 60)),
            insert_interval: Duration::from_secs(1),
            tick_interval: Duration::from_secs(60),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
