use super::CacheValue;
use crate::cache::{CacheError, CacheResult};
use redis::{AsyncCommands, Client};
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

/// Redis list store with single connection and reconnection logic
#[derive(Clone)]
pub struct RedisListStore<T> {
    client: Client,
    connection: Arc<Mutex<Option<redis::aio::MultiplexedConnection>>>,
    key_prefix: String,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> RedisListStore<T> {
    /// Create new Redis list store
    pub fn new(redis_url: &str, key_prefix: String) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Cache(format!("Redis client error: {}", e)))?;

        Ok(Self {
            client,
            connection: Arc::new(Mutex::new(None)),
            key_prefix,
            _phantom: std::marker::PhantomData,
        })
    }

    /// Create Redis list store from existing client (for pre-initialized clients)
    pub fn from_client(client: Client, key_prefix: String) -> Self {
        Self {
            client,
            connection: Arc::new(Mutex::new(None)),
            key_prefix,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get a working Redis connection, creating or reusing existing one
    async fn get_connection(&self) -> CacheResult<redis::aio::MultiplexedConnection> {
        let mut conn_guard = self.connection.lock().await;

        // Try to reuse existing connection
        if let Some(conn) = conn_guard.take() {
            // Test if connection is still alive
            if self.test_connection(&conn).await.is_ok() {
                return Ok(conn);
            }
        }

        // Create new connection
        let new_conn = self
            .client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(|e| CacheError::Connection(format!("Connection failed: {}", e)))?;

        Ok(new_conn)
    }

    /// Test if connection is still alive
    async fn test_connection(
        &self,
        conn: &redis::aio::MultiplexedConnection,
    ) -> Result<(), redis::RedisError> {
        let mut conn = conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    /// Return connection to storage for reuse
    async fn return_connection(&self, conn: redis::aio::MultiplexedConnection) {
        *self.connection.lock().await = Some(conn);
    }

    /// Add key prefix to avoid conflicts
    fn prefixed_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    /// Health check - test Redis connectivity
    pub async fn health_check(&self) -> CacheResult<()> {
        let mut conn = self.get_connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CacheError::Cache(format!("Ping failed: {}", e)))?;

        self.return_connection(conn).await;
        Ok(())
    }
}

/// List operations using postcard serialization for elements
impl<T: CacheValue> RedisListStore<T> {
    /// Read the full list at key, None when the key is absent
    ///
    /// Redis cannot hold an empty list under a key, so absent and empty
    /// are the same observation here.
    pub async fn read_list(&self, key: &str) -> CacheResult<Option<Vec<T>>> {
        let key = self.prefixed_key(key);
        let mut conn = self.get_connection().await?;

        let raw: Vec<Vec<u8>> = conn
            .lrange(&key, 0, -1)
            .await
            .map_err(|e| CacheError::Cache(e.to_string()))?;

        self.return_connection(conn).await;

        if raw.is_empty() {
            return Ok(None);
        }

        let mut items = Vec::with_capacity(raw.len());
        for data in raw {
            let item: T = postcard::from_bytes(&data)
                .map_err(|e| CacheError::Serialization(e.to_string()))?;
            items.push(item);
        }

        Ok(Some(items))
    }

    /// Bulk insert; replace clears prior contents first (atomically)
    pub async fn write_list(&self, key: &str, items: &[T], replace: bool) -> CacheResult<()> {
        let key = self.prefixed_key(key);

        let mut encoded = Vec::with_capacity(items.len());
        for item in items {
            let data = postcard::to_allocvec(item)
                .map_err(|e| CacheError::Serialization(e.to_string()))?;
            encoded.push(data);
        }

        let mut conn = self.get_connection().await?;

        if replace {
            let mut pipe = redis::pipe();
            pipe.atomic().del(&key).ignore();
            if !encoded.is_empty() {
                pipe.rpush(&key, &encoded).ignore();
            }
            pipe.query_async::<()>(&mut conn)
                .await
                .map_err(|e| CacheError::Cache(e.to_string()))?;
        } else if !encoded.is_empty() {
            let _: i64 = conn
                .rpush(&key, &encoded)
                .await
                .map_err(|e| CacheError::Cache(e.to_string()))?;
        }

        self.return_connection(conn).await;
        Ok(())
    }

    /// Set the key's time-to-live; no effect if the key does not exist
    pub async fn set_expiry(&self, key: &str, ttl: Duration) -> CacheResult<()> {
        let key = self.prefixed_key(key);
        let mut conn = self.get_connection().await?;

        let _: bool = conn
            .expire(&key, ttl.as_secs() as i64)
            .await
            .map_err(|e| CacheError::Cache(e.to_string()))?;

        self.return_connection(conn).await;
        Ok(())
    }

    /// Delete key
    pub async fn delete(&self, key: &str) -> CacheResult<()> {
        let key = self.prefixed_key(key);
        let mut conn = self.get_connection().await?;

        let _: () = conn
            .del(&key)
            .await
            .map_err(|e| CacheError::Cache(e.to_string()))?;

        self.return_connection(conn).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redis_store_new() {
        // Client creation does not connect, so this works without a server
        let result: CacheResult<RedisListStore<String>> =
            RedisListStore::new("redis://localhost:6379", "test:".to_string());
        assert!(result.is_ok());
    }

    #[test]
    fn test_redis_store_key_prefix() {
        let store: RedisListStore<String> =
            RedisListStore::new("redis://localhost:6379", "test:".to_string()).unwrap();
        assert_eq!(store.prefixed_key("my_key"), "test:my_key");

        let store: RedisListStore<String> =
            RedisListStore::new("redis://localhost:6379", String::new()).unwrap();
        assert_eq!(
            store.prefixed_key("ratingcounts:hotel:42"),
            "ratingcounts:hotel:42"
        );
    }
}
