use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_backend")]
    pub backend: String,
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    #[serde(default = "default_redis_key_prefix")]
    pub redis_key_prefix: String,
    #[serde(default = "default_summary_ttl_secs")]
    pub summary_ttl_secs: u64,
}

fn default_cache_backend() -> String {
    "memory".to_string()
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_redis_key_prefix() -> String {
    // Cached rating counts are keyed "ratingcounts:hotel:<id>" and external
    // tooling inspects them under exactly that layout, so no extra prefix.
    String::new()
}

fn default_summary_ttl_secs() -> u64 {
    60
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_cache_backend(),
            redis_url: default_redis_url(),
            redis_key_prefix: default_redis_key_prefix(),
            summary_ttl_secs: default_summary_ttl_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.backend, "memory");
        assert_eq!(config.redis_url, "redis://localhost:6379");
        assert_eq!(config.redis_key_prefix, "");
        assert_eq!(config.summary_ttl_secs, 60);
    }
}
