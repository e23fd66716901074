//! Cache layer for aggregate review data
//!
//! This module provides a list-valued key-addressed cache with two
//! backends: a shared in-memory store for tests and single-instance
//! deployments, and Redis for anything that needs to share cache state
//! across processes.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

pub mod config;
pub mod list;

pub use list::{CacheValue, ListCache, ListCacheBackend};

use crate::cache::config::CacheConfig;
use crate::health::{HealthCheckResult, HealthChecker};

/// Cache error types
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache error: {0}")]
    Cache(String),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Key not found")]
    NotFound,
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Shared memory store backend, one map for every list cache instance
type SharedMemoryStore = Arc<RwLock<HashMap<String, Box<dyn std::any::Any + Send + Sync>>>>;

/// Cache manager - creates ListCache instances
#[derive(Clone)]
pub struct CacheManager {
    config: CacheConfig,
    redis_client: Option<redis::Client>,
    memory_store: Option<SharedMemoryStore>,
}

impl CacheManager {
    /// Create new cache manager with memory cache (for testing/single instance)
    pub fn new_memory() -> Self {
        Self {
            config: CacheConfig {
                backend: "memory".to_string(),
                ..Default::default()
            },
            redis_client: None,
            memory_store: Some(Arc::new(RwLock::new(HashMap::new()))),
        }
    }

    /// Create cache manager from configuration
    pub async fn new_from_config(config: &CacheConfig) -> CacheResult<Self> {
        let redis_client = if config.backend == "redis" {
            // Create and test Redis client during initialization
            let client = redis::Client::open(config.redis_url.as_str()).map_err(|e| {
                CacheError::Connection(format!("Redis client creation failed: {}", e))
            })?;

            // Test the connection to fail early if Redis is not available
            let mut conn = client
                .get_multiplexed_tokio_connection()
                .await
                .map_err(|e| CacheError::Connection(format!("Redis connection failed: {}", e)))?;

            redis::cmd("PING")
                .query_async::<String>(&mut conn)
                .await
                .map_err(|e| CacheError::Connection(format!("Redis ping failed: {}", e)))?;

            Some(client)
        } else {
            None
        };

        let memory_store = if config.backend == "memory" {
            Some(Arc::new(RwLock::new(HashMap::new())))
        } else {
            None
        };

        Ok(Self {
            config: config.clone(),
            redis_client,
            memory_store,
        })
    }

    /// Create list cache backend based on pre-initialized backends
    fn create_backend<T: CacheValue>(&self) -> ListCacheBackend<T> {
        if let Some(client) = &self.redis_client {
            let redis = list::redis::RedisListStore::from_client(
                client.clone(),
                self.config.redis_key_prefix.clone(),
            );
            ListCacheBackend::Redis(redis)
        } else if let Some(store) = &self.memory_store {
            ListCacheBackend::Memory(list::memory::MemoryListStore::from_shared_store(
                store.clone(),
            ))
        } else {
            panic!("No backend initialized - this should never happen")
        }
    }

    /// Get a list cache for value type T
    pub fn list_cache<T: CacheValue>(&self) -> ListCache<T> {
        ListCache::new(self.create_backend())
    }

    /// TTL applied to cached rating count summaries
    pub fn summary_ttl(&self) -> Duration {
        Duration::from_secs(self.config.summary_ttl_secs)
    }

    pub async fn health_check(&self) -> HealthCheckResult {
        match self.config.backend.as_str() {
            "redis" => {
                match list::redis::RedisListStore::<String>::new(
                    &self.config.redis_url,
                    self.config.redis_key_prefix.clone(),
                ) {
                    Ok(redis_cache) => match redis_cache.health_check().await {
                        Ok(_) => HealthCheckResult::healthy_with_details(serde_json::json!({
                            "backend": "redis",
                            "status": "healthy",
                            "connection": "ok"
                        })),
                        Err(err) => HealthCheckResult::unhealthy_with_details(
                            "Redis health check failed".to_string(),
                            serde_json::json!({
                                "backend": "redis",
                                "status": "unhealthy",
                                "error": err.to_string()
                            }),
                        ),
                    },
                    Err(err) => HealthCheckResult::unhealthy_with_details(
                        "Redis client creation failed".to_string(),
                        serde_json::json!({
                            "backend": "redis",
                            "status": "unhealthy",
                            "error": err.to_string()
                        }),
                    ),
                }
            }
            _ => {
                // Memory cache always passes health check
                HealthCheckResult::healthy_with_details(serde_json::json!({
                    "backend": "memory",
                    "status": "healthy"
                }))
            }
        }
    }

    fn backend_type(&self) -> &str {
        &self.config.backend
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new_memory()
    }
}

#[async_trait::async_trait]
impl HealthChecker for CacheManager {
    fn name(&self) -> &str {
        "cache"
    }

    async fn check(&self) -> HealthCheckResult {
        self.health_check().await
    }

    fn info(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "service": "Cache Manager",
            "backend": self.backend_type()
        }))
    }
}
