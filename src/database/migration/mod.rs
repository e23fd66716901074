use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20250801_000001_create_cities_table;
mod m20250801_000002_create_hotels_table;
mod m20250801_000003_create_reviews_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_cities_table::Migration),
            Box::new(m20250801_000002_create_hotels_table::Migration),
            Box::new(m20250801_000003_create_reviews_table::Migration),
        ]
    }
}

/// Common table and column identifiers
#[derive(Iden)]
pub enum Cities {
    Table,
    Id,
    Name,
    Country,
}

#[derive(Iden)]
pub enum Hotels {
    Table,
    Id,
    CityId,
    Name,
    Address,
}

#[derive(Iden)]
pub enum Reviews {
    Table,
    Id,
    HotelId,
    Idx,
    Rating,
    Title,
    Details,
    CheckInDate,
    CreatedAt,
}
