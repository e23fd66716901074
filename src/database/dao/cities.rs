use crate::database::entities::{cities, City};
use crate::database::{DatabaseError, DatabaseResult};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

/// Cities DAO for database operations
#[derive(Clone)]
pub struct CitiesDao {
    db: DatabaseConnection,
}

impl CitiesDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a city
    pub async fn insert(&self, name: &str, country: &str) -> DatabaseResult<City> {
        let active_model = cities::ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(name.to_string()),
            country: Set(country.to_string()),
        };

        active_model
            .insert(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }

    /// Find city by name
    pub async fn find_by_name(&self, name: &str) -> DatabaseResult<Option<City>> {
        cities::Entity::find()
            .filter(cities::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }
}
