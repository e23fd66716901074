//! Cache-aside rating summaries
//!
//! The reviews-per-rating aggregate is expensive enough to keep out of the
//! request path, so it is cached under a well-known key with a short TTL.
//! The cache is pure acceleration: a cache fault degrades to a miss or is
//! swallowed, it never fails the request.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::cache::ListCache;
use crate::database::{DatabaseResult, HotelsDao, RatingCount};
use crate::database::entities::Rating;
use crate::error::ServiceResult;

/// Computes a fresh reviews-per-rating aggregate from durable storage
///
/// Must be safe to call repeatedly: idempotent and side-effect-free on
/// storage. Concurrent summary misses may invoke it more than once.
#[async_trait]
pub trait RatingAggregator: Send + Sync {
    async fn rating_counts(&self, hotel_id: i32) -> DatabaseResult<Option<Vec<RatingCount>>>;
}

#[async_trait]
impl RatingAggregator for HotelsDao {
    async fn rating_counts(&self, hotel_id: i32) -> DatabaseResult<Option<Vec<RatingCount>>> {
        Ok(Some(self.find_rating_counts(hotel_id).await?))
    }
}

/// Read-only view over a hotel's reviews-per-rating counts
///
/// Ratings absent from the backing list count as zero. Duplicate ratings
/// in the backing list collapse by overwrite, last occurrence wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsSummary {
    counts: HashMap<Rating, i64>,
}

impl ReviewsSummary {
    pub fn from_counts(counts: impl IntoIterator<Item = RatingCount>) -> Self {
        let mut map = HashMap::new();
        for rating_count in counts {
            map.insert(rating_count.rating, rating_count.count);
        }
        Self { counts: map }
    }

    /// Number of reviews with the given rating, zero when absent
    pub fn reviews_with_rating(&self, rating: Rating) -> i64 {
        self.counts.get(&rating).copied().unwrap_or(0)
    }

    /// Total number of reviews across all ratings
    pub fn total_reviews(&self) -> i64 {
        self.counts.values().sum()
    }
}

/// Cache key builder helper for consistent key generation
#[derive(Clone)]
pub struct CacheKeyBuilder {
    prefix: String,
}

impl CacheKeyBuilder {
    /// Create a new cache key builder with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    /// Build a cache key with the given components
    pub fn build(&self, components: &[&str]) -> String {
        let mut key = self.prefix.clone();
        for component in components {
            key.push(':');
            key.push_str(component);
        }
        key
    }

    /// Build cache key for hotel-based lookup
    pub fn hotel_key(&self, hotel_id: impl std::fmt::Display) -> String {
        self.build(&["hotel", &hotel_id.to_string()])
    }
}

/// Cache-aside accessor for rating summaries
///
/// Reads the cached rating counts first; on a miss recomputes them through
/// the aggregator, repopulates the cache and stamps the TTL.
#[derive(Clone)]
pub struct SummaryCache {
    aggregator: Arc<dyn RatingAggregator>,
    cache: ListCache<RatingCount>,
    keys: CacheKeyBuilder,
    ttl: Duration,
}

impl SummaryCache {
    pub fn new(
        aggregator: Arc<dyn RatingAggregator>,
        cache: ListCache<RatingCount>,
        ttl: Duration,
    ) -> Self {
        Self {
            aggregator,
            cache,
            keys: CacheKeyBuilder::new("ratingcounts"),
            ttl,
        }
    }

    /// Get the reviews-per-rating summary for one hotel
    ///
    /// Cache read failures degrade to a miss; cache write failures are
    /// swallowed after the recompute. Only an aggregator failure
    /// propagates, since then neither cached nor fresh data exists.
    pub async fn summary(&self, hotel_id: i32) -> ServiceResult<ReviewsSummary> {
        let cache_key = self.keys.hotel_key(hotel_id);

        let cached = match self.cache.read_list(&cache_key).await {
            Ok(cached) => cached,
            Err(cache_error) => {
                tracing::warn!("Cache read failed for key {}: {}", cache_key, cache_error);
                None
            }
        };

        let counts = match cached {
            Some(counts) if !counts.is_empty() => {
                tracing::debug!("Cache hit for key: {}", cache_key);
                counts
            }
            _ => {
                tracing::debug!("Cache miss for key: {}", cache_key);

                match self.aggregator.rating_counts(hotel_id).await? {
                    Some(fresh) => {
                        match self.cache.write_list(&cache_key, &fresh, true).await {
                            Ok(()) => {
                                if let Err(cache_error) =
                                    self.cache.set_expiry(&cache_key, self.ttl).await
                                {
                                    tracing::warn!(
                                        "Failed to set expiry for key {}: {}",
                                        cache_key,
                                        cache_error
                                    );
                                }
                            }
                            Err(cache_error) => {
                                tracing::warn!(
                                    "Failed to cache rating counts for key {}: {}",
                                    cache_key,
                                    cache_error
                                );
                            }
                        }
                        fresh
                    }
                    None => Vec::new(),
                }
            }
        };

        Ok(ReviewsSummary::from_counts(counts))
    }
}
