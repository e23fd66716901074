//! Database access layer with domain-specific DAOs
//!
//! This module provides direct database access without abstraction layers.
//! Each domain (cities, hotels, reviews) has its own DAO for focused
//! operations.

use crate::database::config::DatabaseConfig;
use crate::health::{HealthCheckResult, HealthChecker};
use sea_orm::{ConnectOptions, DatabaseConnection};
use thiserror::Error;

pub mod config;
pub mod dao;
pub mod entities;
pub mod migration;

pub use dao::{CitiesDao, HotelsDao, Page, PageRequest, RatingCount, ReviewDetails, ReviewsDao};

/// Database error types
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Record not found")]
    NotFound,
    #[error("Migration error: {0}")]
    Migration(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Database connection manager, hands out DAOs over one connection pool
#[derive(Clone)]
pub struct DatabaseManager {
    connection: DatabaseConnection,
}

impl DatabaseManager {
    /// Create database manager from an existing connection
    pub fn new(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Create database manager from configuration
    pub async fn new_from_config(config: &DatabaseConfig) -> DatabaseResult<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options.max_connections(config.max_connections);

        let connection = sea_orm::Database::connect(options)
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))?;

        Ok(Self { connection })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> DatabaseResult<()> {
        use migration::MigratorTrait;

        migration::Migrator::up(&self.connection, None)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))
    }

    /// Health check for database connection
    pub async fn health_check(&self) -> DatabaseResult<()> {
        self.connection
            .ping()
            .await
            .map_err(|e| DatabaseError::Database(e.to_string()))
    }

    /// Get cities DAO
    pub fn cities(&self) -> CitiesDao {
        CitiesDao::new(self.connection.clone())
    }

    /// Get hotels DAO
    pub fn hotels(&self) -> HotelsDao {
        HotelsDao::new(self.connection.clone())
    }

    /// Get reviews DAO
    pub fn reviews(&self) -> ReviewsDao {
        ReviewsDao::new(self.connection.clone())
    }

    /// Get direct database connection (for migrations and admin operations)
    pub fn connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}

#[async_trait::async_trait]
impl HealthChecker for DatabaseManager {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> HealthCheckResult {
        match self.health_check().await {
            Ok(()) => HealthCheckResult::healthy_with_details(serde_json::json!({
                "status": "healthy",
                "connection": "ok"
            })),
            Err(err) => HealthCheckResult::unhealthy_with_details(
                "Database ping failed".to_string(),
                serde_json::json!({
                    "status": "unhealthy",
                    "error": err.to_string()
                }),
            ),
        }
    }
}
