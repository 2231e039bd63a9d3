use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table for many-to-many relationship between hotels and restaurants
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "szalloda_etterem")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "szallodaID")]
    pub hotel_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "etteremID")]
    pub restaurant_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
