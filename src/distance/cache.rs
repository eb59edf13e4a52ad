//! Read-through cache for external responses.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

/// A read-through key/value cache with a compute-on-miss contract.
///
/// Each key owns its own entry lock, so at most one compute is in flight
/// per key at a time while lookups for other keys proceed concurrently.
/// Failed computes leave the entry empty and are retried on the next
/// lookup; only successful values are cached.
///
/// # Examples
///
/// ```
/// use span_routing::distance::ReadThroughCache;
///
/// let cache: ReadThroughCache<String, i64> = ReadThroughCache::new();
/// let value = cache.get_or_compute("answer".to_string(), || Ok::<_, ()>(42)).unwrap();
/// assert_eq!(*value, 42);
///
/// // Second lookup is served from the cache; the closure never runs.
/// let again = cache
///     .get_or_compute("answer".to_string(), || -> Result<i64, ()> { unreachable!() })
///     .unwrap();
/// assert_eq!(*again, 42);
/// ```
#[derive(Debug)]
pub struct ReadThroughCache<K, V> {
    entries: Mutex<HashMap<K, Arc<Mutex<Option<Arc<V>>>>>>,
}

impl<K: Eq + Hash + Clone, V> ReadThroughCache<K, V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, computing and storing it on a
    /// miss.
    ///
    /// The outer map lock is held only long enough to find or insert the
    /// entry slot; `compute` runs under the per-key lock.
    pub fn get_or_compute<E>(
        &self,
        key: K,
        compute: impl FnOnce() -> std::result::Result<V, E>,
    ) -> std::result::Result<Arc<V>, E> {
        let slot = {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            Arc::clone(entries.entry(key).or_default())
        };

        let mut entry = slot.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(value) = entry.as_ref() {
            return Ok(Arc::clone(value));
        }
        let value = Arc::new(compute()?);
        *entry = Some(Arc::clone(&value));
        Ok(value)
    }

    /// Number of keys with a cached value.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .values()
            .filter(|slot| {
                slot.lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .is_some()
            })
            .count()
    }

    /// Returns `true` if no value has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K: Eq + Hash + Clone, V> Default for ReadThroughCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
