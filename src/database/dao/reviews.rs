use crate::database::entities::{reviews, Rating, Review};
use crate::database::{DatabaseError, DatabaseResult};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

/// Submitted review content; index and creation time are assigned on insert
#[derive(Debug, Clone)]
pub struct ReviewDetails {
    pub rating: Rating,
    pub title: String,
    pub details: String,
    pub check_in_date: NaiveDate,
}

/// Zero-based page request
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 20,
        }
    }
}

/// One page of results with totals
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Reviews DAO for database operations
#[derive(Clone)]
pub struct ReviewsDao {
    db: DatabaseConnection,
}

impl ReviewsDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get one page of a hotel's reviews, ordered by review number
    pub async fn find_by_hotel(
        &self,
        hotel_id: i32,
        page: &PageRequest,
    ) -> DatabaseResult<Page<Review>> {
        let per_page = page.per_page.max(1);
        let paginator = reviews::Entity::find()
            .filter(reviews::Column::HotelId.eq(hotel_id))
            .order_by_asc(reviews::Column::Idx)
            .paginate(&self.db, per_page);

        let totals = paginator
            .num_items_and_pages()
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        let items = paginator
            .fetch_page(page.page)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(Page {
            items,
            page: page.page,
            per_page,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }

    /// Find a hotel's review by its per-hotel review number
    pub async fn find_by_hotel_and_index(
        &self,
        hotel_id: i32,
        idx: i32,
    ) -> DatabaseResult<Option<Review>> {
        reviews::Entity::find()
            .filter(reviews::Column::HotelId.eq(hotel_id))
            .filter(reviews::Column::Idx.eq(idx))
            .one(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }

    /// Insert a review, assigning the next free per-hotel review number
    pub async fn insert(&self, hotel_id: i32, details: &ReviewDetails) -> DatabaseResult<Review> {
        let max_idx: Option<i32> = reviews::Entity::find()
            .select_only()
            .column_as(reviews::Column::Idx.max(), "max_idx")
            .filter(reviews::Column::HotelId.eq(hotel_id))
            .into_tuple::<Option<i32>>()
            .one(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?
            .flatten();

        let active_model = reviews::ActiveModel {
            id: ActiveValue::NotSet,
            hotel_id: Set(hotel_id),
            idx: Set(max_idx.unwrap_or(0) + 1),
            rating: Set(details.rating),
            title: Set(details.title.clone()),
            details: Set(details.details.clone()),
            check_in_date: Set(details.check_in_date),
            created_at: Set(Utc::now()),
        };

        active_model
            .insert(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }
}
