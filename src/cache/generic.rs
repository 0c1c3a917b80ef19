//! Generic Cache Module
//!
//! Defines the minimal storage contract any backing key-value store must satisfy.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

// == Generic Cache ==
/// The basic operations of a key-value cache.
///
/// Implementations are not required to be thread-safe. A store shared between
/// several owners must be synchronized by those owners; see the
/// `Rc<RefCell<C>>` implementation for the single-threaded case.
pub trait GenericCache<K, V> {
    /// Number of entries currently cached.
    fn size(&mut self) -> usize;

    /// Caches `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: K, value: V);

    /// Returns the cached value for `key`, or `None` if it is not cached.
    fn get(&mut self, key: &K) -> Option<V>;

    /// Removes `key` and returns its value, or `None` if it was not cached.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes every entry.
    fn clear(&mut self);
}

impl<K, V, S> GenericCache<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    fn size(&mut self) -> usize {
        self.len()
    }

    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn get(&mut self, key: &K) -> Option<V> {
        HashMap::get(self, key).cloned()
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }
}

// Shared store: the external owner keeps another handle to the same value.
// Panics if a borrow is already held across a cache call.
impl<K, V, C: GenericCache<K, V>> GenericCache<K, V> for Rc<RefCell<C>> {
    fn size(&mut self) -> usize {
        self.borrow_mut().size()
    }

    fn set(&mut self, key: K, value: V) {
        self.borrow_mut().set(key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        self.borrow_mut().get(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.borrow_mut().remove(key)
    }

    fn clear(&mut self) {
        self.borrow_mut().clear()
    }
}
