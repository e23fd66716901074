//! Seeds a throwaway database and walks the review summary flow

use hotel_reviews::cache::CacheManager;
use hotel_reviews::database::config::DatabaseConfig;
use hotel_reviews::database::entities::Rating;
use hotel_reviews::database::{DatabaseManager, PageRequest, ReviewDetails};
use hotel_reviews::{Config, HotelService};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.logging.level))
        .init();

    // Throwaway in-memory database; one connection so every query sees it
    let database = DatabaseManager::new_from_config(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await?;
    database.migrate().await?;

    let city = database.cities().insert("Barcelona", "Spain").await?;
    let hotel = database
        .hotels()
        .insert(city.id, "Hotel Colonial", "Via Laietana 3")
        .await?;

    let cache = CacheManager::new_memory();
    let service = HotelService::new(&database, &cache);

    for (stars, title) in [
        (5, "Fantastic stay"),
        (5, "Great location"),
        (3, "Decent but noisy"),
    ] {
        let details = ReviewDetails {
            rating: Rating::from_stars(stars).expect("star counts above are valid"),
            title: title.to_string(),
            details: "Seeded demo review".to_string(),
            check_in_date: chrono::NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
        };
        service.add_review(&hotel, details).await?;
    }

    let found = service
        .hotel(&city, "Hotel Colonial")
        .await?
        .expect("seeded above");

    // First call computes from the database and populates the cache
    let summary = service.review_summary(&found).await?;
    info!(
        "computed summary: {} five-star, {} three-star, {} one-star",
        summary.reviews_with_rating(Rating::Five),
        summary.reviews_with_rating(Rating::Three),
        summary.reviews_with_rating(Rating::One),
    );

    // Second call within the TTL is served from the cache
    let summary = service.review_summary(&found).await?;
    info!(
        "cached summary: {} reviews total",
        summary.total_reviews()
    );

    let page = service.reviews(&found, &PageRequest::default()).await?;
    info!(
        "{} reviews across {} pages",
        page.total_items, page.total_pages
    );

    Ok(())
}
