//! Expiring LRU Cache Module
//!
//! Decorates any [`GenericCache`] with bounded LRU eviction and a whole-cache
//! flush once a fixed interval has elapsed.

use std::hash::Hash;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::cache::{BuiltCache, CacheStats, GenericCache, GenericCacheBuilder, KeyLedger};
use crate::config::CacheConfig;
use crate::error::Result;

// == Expiring LRU Cache ==
/// Keeps at most `max_size` recently used keys in the wrapped store and clears
/// the whole store once `flush_interval` has elapsed since the last flush.
///
/// Expiration is lazy: the interval is checked at the start of `set`, `get`,
/// `remove` and `size`. A cache that is never touched never flushes.
///
/// Only keys stored through [`set`](GenericCache::set) are tracked; entries
/// the store's owner adds directly are neither counted against `max_size` nor
/// evicted, but they are cleared by a flush.
///
/// The cache is single-threaded. The wrapped store is assumed to be written
/// only through this cache while it is in use.
#[derive(Debug)]
pub struct ExpiringLruCache<K: Eq + Hash + Clone, V, S> {
    delegate: S,
    ledger: KeyLedger<K>,
    flush_interval: Duration,
    last_flush: Instant,
    stats: CacheStats,
    _value: PhantomData<fn() -> V>,
}

impl<K, V, S> ExpiringLruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: GenericCache<K, V>,
{
    // == Constructors ==
    /// Wraps `delegate` with the default max size (100) and flush interval (1 minute).
    pub fn new(delegate: S) -> Self {
        Self::from_parts(CacheConfig::default(), delegate)
    }

    /// Wraps `delegate` with the given configuration.
    ///
    /// # Errors
    /// `CacheError::InvalidConfig` if `max_size` or `flush_interval` is zero.
    pub fn with_config(config: CacheConfig, delegate: S) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, delegate))
    }

    fn from_parts(config: CacheConfig, delegate: S) -> Self {
        Self {
            delegate,
            ledger: KeyLedger::new(config.max_size),
            flush_interval: config.flush_interval,
            last_flush: Instant::now(),
            stats: CacheStats::new(),
            _value: PhantomData,
        }
    }

    // == Accessors ==
    pub fn max_size(&self) -> usize {
        self.ledger.capacity()
    }

    pub fn flush_interval(&self) -> Duration {
        self.flush_interval
    }

    /// Keys currently tracked for eviction, least recently used first.
    pub fn tracked_keys(&self) -> Vec<K> {
        self.ledger.keys()
    }

    pub fn delegate(&self) -> &S {
        &self.delegate
    }

    /// Returns the wrapped store, dropping the ledger and timer.
    pub fn into_inner(self) -> S {
        self.delegate
    }

    // == Stats ==
    /// Returns a snapshot of the activity counters.
    ///
    /// Does not run the flush check, so `total_entries` may include entries
    /// that the next access will flush.
    pub fn stats(&mut self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.delegate.size());
        stats
    }

    // == Recycle ==
    // Clears the store and the ledger once the flush interval has elapsed.
    fn recycle(&mut self) {
        if self.last_flush.elapsed() < self.flush_interval {
            return;
        }
        let tracked = self.ledger.len();
        self.delegate.clear();
        self.ledger.clear();
        self.last_flush = Instant::now();
        self.stats.record_flush();
        debug!(
            "Flush interval of {:?} elapsed, cleared cache ({} tracked keys)",
            self.flush_interval, tracked
        );
    }
}

impl<K, V> ExpiringLruCache<K, V, BuiltCache<K, V>>
where
    K: Eq + Hash + Clone,
{
    /// Builds the wrapped store from closures, then wraps it.
    ///
    /// # Errors
    /// `CacheError::InvalidConfig` for a bad config, or
    /// `CacheError::MissingHandler` if `configure` leaves a piece unset.
    pub fn from_builder<F>(config: CacheConfig, configure: F) -> Result<Self>
    where
        F: FnOnce(GenericCacheBuilder<K, V>) -> GenericCacheBuilder<K, V>,
    {
        let delegate = configure(GenericCacheBuilder::new()).build()?;
        Self::with_config(config, delegate)
    }
}

impl<K, V, S> GenericCache<K, V> for ExpiringLruCache<K, V, S>
where
    K: Eq + Hash + Clone,
    S: GenericCache<K, V>,
{
    fn size(&mut self) -> usize {
        self.recycle();
        self.delegate.size()
    }

    /// Stores the value and marks `key` most recently used. If that pushes
    /// the tracked keys past `max_size`, the least recently used one is
    /// removed from the store.
    fn set(&mut self, key: K, value: V) {
        self.recycle();
        self.delegate.set(key.clone(), value);
        if let Some(evicted) = self.ledger.insert(key) {
            self.delegate.remove(&evicted);
            self.stats.record_eviction();
            debug!(
                "Evicted least recently used entry (max_size={})",
                self.ledger.capacity()
            );
        }
    }

    fn get(&mut self, key: &K) -> Option<V> {
        self.recycle();
        if !self.ledger.touch(key) {
            trace!("get on a key not tracked by the ledger");
        }
        let value = self.delegate.get(key);
        if value.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        value
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.recycle();
        self.ledger.remove(key);
        self.delegate.remove(key)
    }

    /// Empties the store and the ledger. The flush timer keeps its schedule.
    fn clear(&mut self) {
        self.ledger.clear();
        self.delegate.clear();
    }
}
