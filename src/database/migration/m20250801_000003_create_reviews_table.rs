use super::Reviews;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reviews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reviews::HotelId).integer().not_null())
                    .col(ColumnDef::new(Reviews::Idx).integer().not_null())
                    .col(ColumnDef::new(Reviews::Rating).small_integer().not_null())
                    .col(ColumnDef::new(Reviews::Title).string().not_null())
                    .col(ColumnDef::new(Reviews::Details).text().not_null())
                    .col(ColumnDef::new(Reviews::CheckInDate).date().not_null())
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Review numbers are unique per hotel
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_hotel_id_idx")
                    .table(Reviews::Table)
                    .col(Reviews::HotelId)
                    .col(Reviews::Idx)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // The rating counts aggregation groups by rating within one hotel
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reviews_hotel_id_rating")
                    .table(Reviews::Table)
                    .col(Reviews::HotelId)
                    .col(Reviews::Rating)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await
    }
}
