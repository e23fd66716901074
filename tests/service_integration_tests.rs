//! End-to-end service tests over in-memory SQLite
//!
//! Each test migrates a fresh database, seeds it through the DAOs and
//! drives the service the way an embedding application would.

use chrono::NaiveDate;
use hotel_reviews::cache::CacheManager;
use hotel_reviews::database::config::DatabaseConfig;
use hotel_reviews::database::entities::{City, Hotel, Rating};
use hotel_reviews::database::{
    DatabaseManager, PageRequest, RatingCount, ReviewDetails,
};
use hotel_reviews::{HotelService, ServiceError};

async fn setup() -> (DatabaseManager, CacheManager, HotelService) {
    let database = DatabaseManager::new_from_config(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        // A single connection keeps every query on the same in-memory database
        max_connections: 1,
    })
    .await
    .unwrap();
    database.migrate().await.unwrap();

    let cache = CacheManager::new_memory();
    let service = HotelService::new(&database, &cache);
    (database, cache, service)
}

async fn seed_hotel(database: &DatabaseManager) -> (City, Hotel) {
    let city = database.cities().insert("Barcelona", "Spain").await.unwrap();
    let hotel = database
        .hotels()
        .insert(city.id, "Hotel Colonial", "Via Laietana 3")
        .await
        .unwrap();
    (city, hotel)
}

fn review_details(stars: u8, title: &str) -> ReviewDetails {
    ReviewDetails {
        rating: Rating::from_stars(stars).unwrap(),
        title: title.to_string(),
        details: "Stayed two nights.".to_string(),
        check_in_date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
    }
}

#[tokio::test]
async fn test_hotel_lookup() {
    let (database, _cache, service) = setup().await;
    let (city, hotel) = seed_hotel(&database).await;

    let found = service.hotel(&city, "Hotel Colonial").await.unwrap();
    assert_eq!(found, Some(hotel));

    let missing = service.hotel(&city, "No Such Hotel").await.unwrap();
    assert_eq!(missing, None);

    let invalid = service.hotel(&city, "").await;
    assert!(matches!(invalid, Err(ServiceError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_add_review_assigns_consecutive_indexes() {
    let (database, _cache, service) = setup().await;
    let (_city, hotel) = seed_hotel(&database).await;

    let first = service
        .add_review(&hotel, review_details(5, "Fantastic stay"))
        .await
        .unwrap();
    let second = service
        .add_review(&hotel, review_details(3, "Decent but noisy"))
        .await
        .unwrap();

    assert_eq!(first.idx, 1);
    assert_eq!(second.idx, 2);

    let looked_up = service.review(&hotel, 2).await.unwrap();
    assert_eq!(looked_up, Some(second));
    assert_eq!(service.review(&hotel, 3).await.unwrap(), None);
}

#[tokio::test]
async fn test_reviews_pagination() {
    let (database, _cache, service) = setup().await;
    let (_city, hotel) = seed_hotel(&database).await;

    for i in 1..=5 {
        service
            .add_review(&hotel, review_details(4, &format!("Review {}", i)))
            .await
            .unwrap();
    }

    let page = service
        .reviews(
            &hotel,
            &PageRequest {
                page: 0,
                per_page: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(page.total_items, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(
        page.items.iter().map(|r| r.idx).collect::<Vec<_>>(),
        vec![1, 2]
    );

    let last = service
        .reviews(
            &hotel,
            &PageRequest {
                page: 2,
                per_page: 2,
            },
        )
        .await
        .unwrap();
    assert_eq!(
        last.items.iter().map(|r| r.idx).collect::<Vec<_>>(),
        vec![5]
    );
}

#[tokio::test]
async fn test_rating_counts_aggregation() {
    let (database, _cache, service) = setup().await;
    let (_city, hotel) = seed_hotel(&database).await;

    for stars in [5, 5, 5, 3, 1] {
        service
            .add_review(&hotel, review_details(stars, "A review"))
            .await
            .unwrap();
    }

    let counts = database.hotels().find_rating_counts(hotel.id).await.unwrap();
    assert_eq!(
        counts,
        vec![
            RatingCount {
                rating: Rating::One,
                count: 1
            },
            RatingCount {
                rating: Rating::Three,
                count: 1
            },
            RatingCount {
                rating: Rating::Five,
                count: 3
            },
        ]
    );
}

#[tokio::test]
async fn test_review_summary_served_from_cache_within_ttl() {
    let (database, cache, service) = setup().await;
    let (_city, hotel) = seed_hotel(&database).await;

    service
        .add_review(&hotel, review_details(5, "Fantastic stay"))
        .await
        .unwrap();

    let summary = service.review_summary(&hotel).await.unwrap();
    assert_eq!(summary.reviews_with_rating(Rating::Five), 1);

    // A new review does not show up while the cached summary is fresh
    service
        .add_review(&hotel, review_details(5, "Also fantastic"))
        .await
        .unwrap();
    let cached = service.review_summary(&hotel).await.unwrap();
    assert_eq!(cached.reviews_with_rating(Rating::Five), 1);

    // Dropping the cache entry forces a recompute that sees the new review
    cache
        .list_cache::<RatingCount>()
        .delete(&format!("ratingcounts:hotel:{}", hotel.id))
        .await
        .unwrap();
    let recomputed = service.review_summary(&hotel).await.unwrap();
    assert_eq!(recomputed.reviews_with_rating(Rating::Five), 2);
}

#[tokio::test]
async fn test_review_summary_for_hotel_without_reviews() {
    let (database, _cache, service) = setup().await;
    let (_city, hotel) = seed_hotel(&database).await;

    let summary = service.review_summary(&hotel).await.unwrap();
    assert_eq!(summary.total_reviews(), 0);
    for stars in 1..=5u8 {
        assert_eq!(
            summary.reviews_with_rating(Rating::from_stars(stars).unwrap()),
            0
        );
    }
}

#[tokio::test]
async fn test_health_checks() {
    let (database, cache, _service) = setup().await;

    assert!(database.health_check().await.is_ok());
    assert!(cache.health_check().await.is_healthy());
}
