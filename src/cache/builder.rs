//! Cache Builder Module
//!
//! Assembles a [`GenericCache`] from independently supplied closures, for
//! wiring the cache to a store owned elsewhere.

use std::fmt;

use crate::cache::GenericCache;
use crate::error::{CacheError, Result};

type SizeFn = Box<dyn Fn() -> usize>;
type SetFn<K, V> = Box<dyn FnMut(K, V)>;
type GetFn<K, V> = Box<dyn FnMut(&K) -> Option<V>>;
type RemoveFn<K, V> = Box<dyn FnMut(&K) -> Option<V>>;
type ClearFn = Box<dyn FnMut()>;

/// A builder for [`BuiltCache`].
///
/// Every piece must be supplied before [`build`](Self::build). `size` takes a
/// live accessor, evaluated on each read, so the built cache reports the
/// backing store's current entry count.
///
/// ```
/// use std::cell::RefCell;
/// use std::collections::HashMap;
/// use std::rc::Rc;
/// use flush_cache::{GenericCache, GenericCacheBuilder};
///
/// let map = Rc::new(RefCell::new(HashMap::<u32, String>::new()));
/// let (m1, m2, m3, m4, m5) = (map.clone(), map.clone(), map.clone(), map.clone(), map.clone());
///
/// let mut cache = GenericCacheBuilder::<u32, String>::new()
///     .size(move || m1.borrow().len())
///     .set(move |k, v| {
///         m2.borrow_mut().insert(k, v);
///     })
///     .get(move |k| m3.borrow().get(k).cloned())
///     .remove(move |k| m4.borrow_mut().remove(k))
///     .clear(move || m5.borrow_mut().clear())
///     .build()
///     .unwrap();
///
/// cache.set(1, "one".to_string());
/// assert_eq!(cache.size(), 1);
/// assert_eq!(map.borrow().len(), 1);
/// ```
pub struct GenericCacheBuilder<K, V> {
    size: Option<SizeFn>,
    set: Option<SetFn<K, V>>,
    get: Option<GetFn<K, V>>,
    remove: Option<RemoveFn<K, V>>,
    clear: Option<ClearFn>,
}

impl<K, V> GenericCacheBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            size: None,
            set: None,
            get: None,
            remove: None,
            clear: None,
        }
    }

    /// Sets the live entry-count accessor.
    pub fn size(mut self, size: impl Fn() -> usize + 'static) -> Self {
        self.size = Some(Box::new(size));
        self
    }

    pub fn set(mut self, set: impl FnMut(K, V) + 'static) -> Self {
        self.set = Some(Box::new(set));
        self
    }

    pub fn get(mut self, get: impl FnMut(&K) -> Option<V> + 'static) -> Self {
        self.get = Some(Box::new(get));
        self
    }

    pub fn remove(mut self, remove: impl FnMut(&K) -> Option<V> + 'static) -> Self {
        self.remove = Some(Box::new(remove));
        self
    }

    pub fn clear(mut self, clear: impl FnMut() + 'static) -> Self {
        self.clear = Some(Box::new(clear));
        self
    }

    /// Consumes the builder and produces the cache.
    ///
    /// # Errors
    /// `CacheError::MissingHandler` naming the first unset piece, checked in
    /// the order `size`, `set`, `get`, `remove`, `clear`.
    pub fn build(self) -> Result<BuiltCache<K, V>> {
        Ok(BuiltCache {
            size: self.size.ok_or(CacheError::MissingHandler("size"))?,
            set: self.set.ok_or(CacheError::MissingHandler("set"))?,
            get: self.get.ok_or(CacheError::MissingHandler("get"))?,
            remove: self.remove.ok_or(CacheError::MissingHandler("remove"))?,
            clear: self.clear.ok_or(CacheError::MissingHandler("clear"))?,
        })
    }
}

impl<K, V> Default for GenericCacheBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for GenericCacheBuilder<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericCacheBuilder")
            .field("has_size", &self.size.is_some())
            .field("has_set", &self.set.is_some())
            .field("has_get", &self.get.is_some())
            .field("has_remove", &self.remove.is_some())
            .field("has_clear", &self.clear.is_some())
            .finish()
    }
}

// == Built Cache ==
/// A [`GenericCache`] that forwards every operation to the closures it was
/// built from. The handlers cannot be replaced once built.
pub struct BuiltCache<K, V> {
    size: SizeFn,
    set: SetFn<K, V>,
    get: GetFn<K, V>,
    remove: RemoveFn<K, V>,
    clear: ClearFn,
}

impl<K, V> GenericCache<K, V> for BuiltCache<K, V> {
    fn size(&mut self) -> usize {
        (self.size)()
    }

    fn set(&mut self, key: K, value: V) {
        (self.set)(key, value)
    }

    fn get(&mut self, key: &K) -> Option<V> {
        (self.get)(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        (self.remove)(key)
    }

    fn clear(&mut self) {
        (self.clear)()
    }
}

impl<K, V> fmt::Debug for BuiltCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltCache").finish_non_exhaustive()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    type SharedMap = Rc<RefCell<HashMap<u32, String>>>;

    fn complete_builder(map: &SharedMap) -> GenericCacheBuilder<u32, String> {
        let (m1, m2, m3, m4, m5) = (
            map.clone(),
            map.clone(),
            map.clone(),
            map.clone(),
            map.clone(),
        );
        GenericCacheBuilder::<u32, String>::new()
            .size(move || m1.borrow().len())
            .set(move |k, v| {
                m2.borrow_mut().insert(k, v);
            })
            .get(move |k| m3.borrow().get(k).cloned())
            .remove(move |k| m4.borrow_mut().remove(k))
            .clear(move || m5.borrow_mut().clear())
    }

    #[test]
    fn test_builder_complete_builds() {
        let map = SharedMap::default();
        let mut cache = complete_builder(&map).build().unwrap();

        cache.set(1, "a".to_string());
        assert_eq!(cache.get(&1), Some("a".to_string()));
        assert_eq!(cache.remove(&1), Some("a".to_string()));
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn test_builder_size_is_live() {
        let map = SharedMap::default();
        let mut cache = complete_builder(&map).build().unwrap();
        assert_eq!(cache.size(), 0);

        // Mutations made by the external owner are visible too
        map.borrow_mut().insert(10, "x".to_string());
        map.borrow_mut().insert(11, "y".to_string());
        assert_eq!(cache.size(), 2);

        cache.clear();
        assert_eq!(cache.size(), 0);
    }

    #[test]
    fn test_builder_empty_fails_on_size() {
        let result = GenericCacheBuilder::<u32, String>::new().build();
        assert_eq!(result.unwrap_err(), CacheError::MissingHandler("size"));
    }

    #[test]
    fn test_builder_reports_each_missing_handler() {
        let map = SharedMap::default();

        let missing_set = GenericCacheBuilder::<u32, String> {
            set: None,
            ..complete_builder(&map)
        };
        assert_eq!(
            missing_set.build().unwrap_err(),
            CacheError::MissingHandler("set")
        );

        let missing_get = GenericCacheBuilder::<u32, String> {
            get: None,
            ..complete_builder(&map)
        };
        assert_eq!(
            missing_get.build().unwrap_err(),
            CacheError::MissingHandler("get")
        );

        let missing_remove = GenericCacheBuilder::<u32, String> {
            remove: None,
            ..complete_builder(&map)
        };
        assert_eq!(
            missing_remove.build().unwrap_err(),
            CacheError::MissingHandler("remove")
        );

        let missing_clear = GenericCacheBuilder::<u32, String> {
            clear: None,
            ..complete_builder(&map)
        };
        assert_eq!(
            missing_clear.build().unwrap_err(),
            CacheError::MissingHandler("clear")
        );
    }

    #[test]
    fn test_builder_debug_shows_progress() {
        let builder = GenericCacheBuilder::<u32, String>::new().size(|| 0);
        let debug = format!("{:?}", builder);
        assert!(debug.contains("has_size: true"));
        assert!(debug.contains("has_set: false"));
    }
}
