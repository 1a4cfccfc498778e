use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::key_value::KeyValueStore;

/// In-memory store guarded by a single `RwLock`.
///
/// Contents live for the lifetime of the process. A poisoned lock is
/// recovered rather than propagated: the map holds plain data and every
/// mutation is a single `BTreeMap` call, so it is never left half-written.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<BTreeMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<K, V>> {
        self.inner.read().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering poisoned store lock (read)");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<K, V>> {
        self.inner.write().unwrap_or_else(|poisoned| {
            tracing::warn!("recovering poisoned store lock (write)");
            poisoned.into_inner()
        })
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyValueStore<K, V> for InMemoryStore<K, V>
where
    K: Ord + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    fn put(&self, key: K, value: V) {
        self.write().insert(key, value);
    }

    fn exists(&self, key: &K) -> bool {
        self.read().contains_key(key)
    }

    fn insert_if_absent(&self, key: K, value: V) -> bool {
        let mut map = self.write();
        if map.contains_key(&key) {
            return false;
        }
        map.insert(key, value);
        true
    }

    fn list(&self) -> Vec<V> {
        self.read().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
