use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review rating on the one-to-five-star scale
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
pub enum Rating {
    #[sea_orm(num_value = 1)]
    #[serde(rename = "one")]
    One,
    #[sea_orm(num_value = 2)]
    #[serde(rename = "two")]
    Two,
    #[sea_orm(num_value = 3)]
    #[serde(rename = "three")]
    Three,
    #[sea_orm(num_value = 4)]
    #[serde(rename = "four")]
    Four,
    #[sea_orm(num_value = 5)]
    #[serde(rename = "five")]
    Five,
}

impl Rating {
    /// Number of stars this rating carries
    pub fn stars(&self) -> u8 {
        match self {
            Rating::One => 1,
            Rating::Two => 2,
            Rating::Three => 3,
            Rating::Four => 4,
            Rating::Five => 5,
        }
    }

    /// Look up a rating by its star count
    pub fn from_stars(stars: u8) -> Option<Self> {
        match stars {
            1 => Some(Rating::One),
            2 => Some(Rating::Two),
            3 => Some(Rating::Three),
            4 => Some(Rating::Four),
            5 => Some(Rating::Five),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    /// Per-hotel review number, assigned consecutively from 1
    pub idx: i32,
    pub rating: Rating,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub check_in_date: Date,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
