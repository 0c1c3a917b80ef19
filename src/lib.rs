//! Flush Cache - A generic key-value cache decorator
//!
//! Wraps any store implementing [`GenericCache`] with bounded LRU eviction and
//! a whole-cache flush on a fixed interval.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{BuiltCache, CacheStats, ExpiringLruCache, GenericCache, GenericCacheBuilder};
pub use config::{CacheConfig, DemoConfig};
pub use error::{CacheError, Result};
pub use tasks::spawn_clock_task;
