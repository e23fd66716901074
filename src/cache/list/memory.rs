use super::CacheResult;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// List entry with optional expiration - generic over element type T
#[derive(Clone, Debug)]
struct ListEntry<T> {
    items: Vec<T>,
    expires_at: Option<DateTime<Utc>>,
}

impl<T> ListEntry<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items,
            expires_at: None,
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| Utc::now() > exp)
    }
}

/// Shared memory store type
type SharedMemoryStore = Arc<RwLock<HashMap<String, Box<dyn std::any::Any + Send + Sync>>>>;

/// In-memory list store using shared storage
#[derive(Clone)]
pub struct MemoryListStore<T> {
    store: SharedMemoryStore,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> MemoryListStore<T> {
    /// Create new memory store with its own storage
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Create memory store from shared storage (managed by CacheManager)
    pub fn from_shared_store(store: SharedMemoryStore) -> Self {
        Self {
            store,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> Default for MemoryListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> MemoryListStore<T> {
    /// Read the list stored at key, None when absent or expired
    pub async fn read_list(&self, key: &str) -> CacheResult<Option<Vec<T>>> {
        let store = self.store.read().await;

        if let Some(boxed_entry) = store.get(key) {
            if let Some(entry) = boxed_entry.downcast_ref::<ListEntry<T>>() {
                if entry.is_expired() {
                    drop(store);
                    // Clean up expired entry
                    let mut store = self.store.write().await;
                    store.remove(key);
                    return Ok(None);
                }

                Ok(Some(entry.items.clone()))
            } else {
                // Type mismatch - this shouldn't happen with proper cache key prefixing
                Ok(None)
            }
        } else {
            Ok(None)
        }
    }

    /// Bulk insert; replace clears prior contents, otherwise items append
    ///
    /// A replacing write starts a fresh entry with no expiry; an appending
    /// write keeps the existing entry's expiry.
    pub async fn write_list(&self, key: &str, items: &[T], replace: bool) -> CacheResult<()> {
        let mut store = self.store.write().await;

        if !replace {
            if let Some(boxed_entry) = store.get_mut(key) {
                if let Some(entry) = boxed_entry.downcast_mut::<ListEntry<T>>() {
                    if !entry.is_expired() {
                        entry.items.extend(items.iter().cloned());
                        return Ok(());
                    }
                }
            }
        }

        let entry = ListEntry::new(items.to_vec());
        let boxed_entry: Box<dyn std::any::Any + Send + Sync> = Box::new(entry);
        store.insert(key.to_string(), boxed_entry);

        Ok(())
    }

    /// Set the key's expiry; no effect if the key does not exist
    pub async fn set_expiry(&self, key: &str, ttl: Duration) -> CacheResult<()> {
        let mut store = self.store.write().await;

        if let Some(boxed_entry) = store.get_mut(key) {
            if let Some(entry) = boxed_entry.downcast_mut::<ListEntry<T>>() {
                if entry.is_expired() {
                    store.remove(key);
                    return Ok(());
                }
                entry.expires_at =
                    chrono::Duration::from_std(ttl).ok().map(|ttl| Utc::now() + ttl);
            }
        }

        Ok(())
    }

    /// Delete key
    pub async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }

    /// Clear all entries
    pub async fn clear(&self) -> CacheResult<()> {
        let mut store = self.store.write().await;
        store.clear();
        Ok(())
    }
}
