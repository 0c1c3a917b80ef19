//! Cache Module
//!
//! Provides a generic key-value cache contract and a decorator adding LRU
//! eviction and interval-based flushing on top of any backing store.

mod builder;
mod expiring;
mod generic;
mod ledger;
mod stats;


use std::time::Duration;

// Re-export public types
pub use builder::{BuiltCache, GenericCacheBuilder};
pub use expiring::ExpiringLruCache;
pub use generic::GenericCache;
pub(crate) use ledger::KeyLedger;
pub use stats::CacheStats;

// == Public Constants ==
/// Default number of keys tracked before LRU eviction
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Default time between whole-cache flushes
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(60);
