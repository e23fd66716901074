//! Redis list cache integration tests
//!
//! These tests verify that the Redis backend matches the memory backend's
//! ListCache behavior, including TTL expiry and replace-vs-append writes.
//!
//! Note: These tests will be skipped if Redis is not available on localhost:6379

use hotel_reviews::cache::config::CacheConfig;
use hotel_reviews::cache::CacheManager;
use hotel_reviews::database::entities::Rating;
use hotel_reviews::database::RatingCount;
use serial_test::serial;
use std::time::Duration;

// Test helper function to create Redis cache manager
async fn create_redis_cache_manager() -> Option<CacheManager> {
    let redis_url =
        std::env::var("TEST_REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    let is_explicit = std::env::var("TEST_REDIS_URL").is_ok();

    let config = CacheConfig {
        backend: "redis".to_string(),
        redis_url,
        redis_key_prefix: "test_hotel_reviews:".to_string(),
        summary_ttl_secs: 60,
    };

    match CacheManager::new_from_config(&config).await {
        Ok(manager) => Some(manager),
        Err(e) => {
            if is_explicit {
                // TEST_REDIS_URL was explicitly set, so this should be an error
                panic!("Redis connection failed (TEST_REDIS_URL is set): {}", e);
            } else {
                // TEST_REDIS_URL was not set, skip test gracefully
                println!("Redis not available, skipping test: {}", e);
                None
            }
        }
    }
}

macro_rules! get_redis_cache_manager {
    () => {
        match create_redis_cache_manager().await {
            Some(manager) => manager,
            None => {
                return;
            }
        }
    };
}

fn rating_count(stars: u8, count: i64) -> RatingCount {
    RatingCount {
        rating: Rating::from_stars(stars).unwrap(),
        count,
    }
}

#[tokio::test]
#[serial]
async fn test_redis_list_round_trip() {
    let manager = get_redis_cache_manager!();
    let cache = manager.list_cache::<RatingCount>();

    cache.delete("ratingcounts:hotel:901").await.unwrap();
    assert_eq!(
        cache.read_list("ratingcounts:hotel:901").await.unwrap(),
        None
    );

    let counts = vec![rating_count(5, 10), rating_count(3, 2)];
    cache
        .write_list("ratingcounts:hotel:901", &counts, true)
        .await
        .unwrap();
    assert_eq!(
        cache.read_list("ratingcounts:hotel:901").await.unwrap(),
        Some(counts)
    );

    cache.delete("ratingcounts:hotel:901").await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_redis_list_replace_and_append() {
    let manager = get_redis_cache_manager!();
    let cache = manager.list_cache::<RatingCount>();

    cache.delete("ratingcounts:hotel:902").await.unwrap();

    cache
        .write_list("ratingcounts:hotel:902", &[rating_count(1, 1)], true)
        .await
        .unwrap();
    cache
        .write_list("ratingcounts:hotel:902", &[rating_count(2, 2)], false)
        .await
        .unwrap();
    assert_eq!(
        cache.read_list("ratingcounts:hotel:902").await.unwrap(),
        Some(vec![rating_count(1, 1), rating_count(2, 2)])
    );

    // Replace clears residual contents
    cache
        .write_list("ratingcounts:hotel:902", &[rating_count(4, 5)], true)
        .await
        .unwrap();
    assert_eq!(
        cache.read_list("ratingcounts:hotel:902").await.unwrap(),
        Some(vec![rating_count(4, 5)])
    );

    // Replacing with an empty list leaves the key absent
    cache
        .write_list("ratingcounts:hotel:902", &[], true)
        .await
        .unwrap();
    assert_eq!(
        cache.read_list("ratingcounts:hotel:902").await.unwrap(),
        None
    );
}

#[tokio::test]
#[serial]
async fn test_redis_list_expiry() {
    let manager = get_redis_cache_manager!();
    let cache = manager.list_cache::<RatingCount>();

    cache.delete("ratingcounts:hotel:903").await.unwrap();
    cache
        .write_list("ratingcounts:hotel:903", &[rating_count(5, 1)], true)
        .await
        .unwrap();
    cache
        .set_expiry("ratingcounts:hotel:903", Duration::from_secs(1))
        .await
        .unwrap();

    assert!(cache
        .read_list("ratingcounts:hotel:903")
        .await
        .unwrap()
        .is_some());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert_eq!(
        cache.read_list("ratingcounts:hotel:903").await.unwrap(),
        None
    );
}

#[tokio::test]
#[serial]
async fn test_redis_set_expiry_on_missing_key_is_noop() {
    let manager = get_redis_cache_manager!();
    let cache = manager.list_cache::<RatingCount>();

    cache.delete("ratingcounts:hotel:904").await.unwrap();
    cache
        .set_expiry("ratingcounts:hotel:904", Duration::from_secs(60))
        .await
        .unwrap();
    assert_eq!(
        cache.read_list("ratingcounts:hotel:904").await.unwrap(),
        None
    );
}
