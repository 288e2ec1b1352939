use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Generic in-memory key-value map store.
///
/// Wraps a `HashMap<K, V>` behind an async `RwLock` and provides simple CRUD
/// helpers. Every operation takes the lock once, so each call is a single
/// atomic step against the map.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<RwLock<HashMap<K, V>>>,
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// List all values as a snapshot, in unspecified order.
    pub async fn list(&self) -> Vec<V> {
        let map = self.inner.read().await;
        map.values().cloned().collect()
    }

    /// Get value by key.
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).cloned()
    }

    /// Insert or replace a value by key.
    pub async fn insert(&self, key: K, value: V) {
        let mut map = self.inner.write().await;
        map.insert(key, value);
    }

    /// Remove a key; returns whether it existed.
    pub async fn remove(&self, key: &K) -> bool {
        let mut map = self.inner.write().await;
        map.remove(key).is_some()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        let map = self.inner.read().await;
        map.len()
    }

    /// Apply a mutation to the underlying map under a single write lock.
    pub async fn update_map<F, T>(&self, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut HashMap<K, V>) -> Result<T, ServiceError>,
    {
        let mut map = self.inner.write().await;
        f(&mut map)
    }
}

impl<K, V> Default for MemoryMapStore<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}
