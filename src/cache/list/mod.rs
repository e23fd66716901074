//! List-valued cache with pluggable backends
//!
//! Values live under a key as an ordered list. Writers either replace the
//! whole list or append to it; expiry applies to the key as a whole and is
//! set separately from the write.

pub mod memory;
pub mod redis;

use crate::cache::CacheResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Trait bound for values stored in list caches
pub trait CacheValue: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

impl<T> CacheValue for T where T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {}

/// List cache backend enum
#[derive(Clone)]
pub enum ListCacheBackend<T> {
    Memory(memory::MemoryListStore<T>), // values stored as-is
    Redis(redis::RedisListStore<T>),    // postcard-encoded list elements
}

/// List cache instance for value type T
#[derive(Clone)]
pub struct ListCache<T> {
    backend: ListCacheBackend<T>,
}

impl<T: CacheValue> ListCache<T> {
    pub(crate) fn new(backend: ListCacheBackend<T>) -> Self {
        Self { backend }
    }

    /// Read the full list stored at key
    ///
    /// Returns None when the key is absent or expired. An empty list reads
    /// back as None on the Redis backend, so callers must treat None and
    /// empty alike.
    pub async fn read_list(&self, key: &str) -> CacheResult<Option<Vec<T>>> {
        match &self.backend {
            ListCacheBackend::Memory(store) => store.read_list(key).await,
            ListCacheBackend::Redis(store) => store.read_list(key).await,
        }
    }

    /// Bulk insert into the list at key
    ///
    /// With `replace` set, any residual value at the key is cleared first;
    /// otherwise items are appended to the existing list.
    pub async fn write_list(&self, key: &str, items: &[T], replace: bool) -> CacheResult<()> {
        match &self.backend {
            ListCacheBackend::Memory(store) => store.write_list(key, items, replace).await,
            ListCacheBackend::Redis(store) => store.write_list(key, items, replace).await,
        }
    }

    /// Set or overwrite the key's time-to-live
    ///
    /// No effect if the key does not exist.
    pub async fn set_expiry(&self, key: &str, ttl: Duration) -> CacheResult<()> {
        match &self.backend {
            ListCacheBackend::Memory(store) => store.set_expiry(key, ttl).await,
            ListCacheBackend::Redis(store) => store.set_expiry(key, ttl).await,
        }
    }

    /// Delete the list at key
    pub async fn delete(&self, key: &str) -> CacheResult<()> {
        match &self.backend {
            ListCacheBackend::Memory(store) => store.delete(key).await,
            ListCacheBackend::Redis(store) => store.delete(key).await,
        }
    }
}
