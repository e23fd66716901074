use crate::database::entities::{hotels, reviews, Hotel, Rating};
use crate::database::{DatabaseError, DatabaseResult};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde::{Deserialize, Serialize};

/// Number of reviews with a given rating for one hotel
///
/// Produced by the aggregation query and cached as a list under the
/// hotel's rating counts key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct RatingCount {
    pub rating: Rating,
    pub count: i64,
}

/// Hotels DAO for database operations
#[derive(Clone)]
pub struct HotelsDao {
    db: DatabaseConnection,
}

impl HotelsDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a hotel
    pub async fn insert(&self, city_id: i32, name: &str, address: &str) -> DatabaseResult<Hotel> {
        let active_model = hotels::ActiveModel {
            id: ActiveValue::NotSet,
            city_id: Set(city_id),
            name: Set(name.to_string()),
            address: Set(address.to_string()),
        };

        active_model
            .insert(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }

    /// Find hotel by city and name
    pub async fn find_by_city_and_name(
        &self,
        city_id: i32,
        name: &str,
    ) -> DatabaseResult<Option<Hotel>> {
        hotels::Entity::find()
            .filter(hotels::Column::CityId.eq(city_id))
            .filter(hotels::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }

    /// Aggregate review counts per rating for one hotel
    ///
    /// Ratings with no reviews are absent from the result, not zero rows.
    pub async fn find_rating_counts(&self, hotel_id: i32) -> DatabaseResult<Vec<RatingCount>> {
        reviews::Entity::find()
            .select_only()
            .column(reviews::Column::Rating)
            .column_as(reviews::Column::Id.count(), "count")
            .filter(reviews::Column::HotelId.eq(hotel_id))
            .group_by(reviews::Column::Rating)
            .order_by_asc(reviews::Column::Rating)
            .into_model::<RatingCount>()
            .all(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }
}
