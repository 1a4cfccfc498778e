use std::sync::Arc;

/// Process-scoped key/value store abstraction.
///
/// Implementations must make `insert_if_absent` atomic with respect to every
/// other operation: it is what keeps keys unique under concurrent writers.
pub trait KeyValueStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;

    /// Insert or overwrite.
    fn put(&self, key: K, value: V);

    fn exists(&self, key: &K) -> bool;

    /// Insert only when `key` is not yet present. Returns `false` (and leaves
    /// the existing value untouched) otherwise.
    fn insert_if_absent(&self, key: K, value: V) -> bool;

    /// Snapshot of all values in key order.
    fn list(&self) -> Vec<V>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> KeyValueStore<K, V> for Arc<S>
where
    S: KeyValueStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn put(&self, key: K, value: V) {
        (**self).put(key, value)
    }

    fn exists(&self, key: &K) -> bool {
        (**self).exists(key)
    }

    fn insert_if_absent(&self, key: K, value: V) -> bool {
        (**self).insert_if_absent(key, value)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
