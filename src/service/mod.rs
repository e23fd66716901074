//! Hotel review service
//!
//! Lookup and review creation delegate straight to the DAOs after eager
//! argument validation; the rating summary goes through the cache-aside
//! path in [`summary`].

use std::sync::Arc;

use crate::cache::CacheManager;
use crate::database::entities::{City, Hotel, Review};
use crate::database::{DatabaseManager, HotelsDao, Page, PageRequest, ReviewDetails, ReviewsDao};
use crate::error::{ServiceError, ServiceResult};

pub mod summary;

pub use summary::{RatingAggregator, ReviewsSummary, SummaryCache};

/// Hotel review service over the persistence layer and the summary cache
#[derive(Clone)]
pub struct HotelService {
    hotels: HotelsDao,
    reviews: ReviewsDao,
    summaries: SummaryCache,
}

impl HotelService {
    /// Wire the service from a database manager and a cache manager
    pub fn new(database: &DatabaseManager, cache: &CacheManager) -> Self {
        let hotels = database.hotels();
        let summaries = SummaryCache::new(
            Arc::new(hotels.clone()),
            cache.list_cache(),
            cache.summary_ttl(),
        );

        Self {
            hotels,
            reviews: database.reviews(),
            summaries,
        }
    }

    /// Find a hotel by city and name
    pub async fn hotel(&self, city: &City, name: &str) -> ServiceResult<Option<Hotel>> {
        if name.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "hotel name must not be empty".to_string(),
            ));
        }

        Ok(self.hotels.find_by_city_and_name(city.id, name).await?)
    }

    /// Get one page of a hotel's reviews, ordered by review number
    pub async fn reviews(&self, hotel: &Hotel, page: &PageRequest) -> ServiceResult<Page<Review>> {
        Ok(self.reviews.find_by_hotel(hotel.id, page).await?)
    }

    /// Find a hotel's review by its review number
    pub async fn review(&self, hotel: &Hotel, review_number: i32) -> ServiceResult<Option<Review>> {
        Ok(self
            .reviews
            .find_by_hotel_and_index(hotel.id, review_number)
            .await?)
    }

    /// Add a review to a hotel, assigning the next review number
    ///
    /// The cached rating summary is not invalidated; its staleness is
    /// bounded by the summary TTL.
    pub async fn add_review(&self, hotel: &Hotel, details: ReviewDetails) -> ServiceResult<Review> {
        if details.title.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "review title must not be empty".to_string(),
            ));
        }

        Ok(self.reviews.insert(hotel.id, &details).await?)
    }

    /// Get the hotel's reviews-per-rating summary, served from cache when fresh
    pub async fn review_summary(&self, hotel: &Hotel) -> ServiceResult<ReviewsSummary> {
        self.summaries.summary(hotel.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DatabaseConnection;

    fn disconnected_service() -> HotelService {
        // A disconnected database: any operation that reaches I/O fails
        let database = DatabaseManager::new(DatabaseConnection::default());
        HotelService::new(&database, &CacheManager::new_memory())
    }

    fn test_city() -> City {
        City {
            id: 1,
            name: "Barcelona".to_string(),
            country: "Spain".to_string(),
        }
    }

    #[tokio::test]
    async fn test_hotel_rejects_empty_name_before_io() {
        let service = disconnected_service();

        let result = service.hotel(&test_city(), "").await;
        assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_add_review_rejects_empty_title_before_io() {
        let service = disconnected_service();
        let hotel = Hotel {
            id: 1,
            city_id: 1,
            name: "Grand Budapest".to_string(),
            address: "1 Main Square".to_string(),
        };

        let details = ReviewDetails {
            rating: crate::database::entities::Rating::Four,
            title: String::new(),
            details: "details".to_string(),
            check_in_date: chrono::NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        };

        let result = service.add_review(&hotel, details).await;
        assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
    }
}
