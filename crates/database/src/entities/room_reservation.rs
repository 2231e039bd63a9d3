use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Junction table for many-to-many relationship between rooms and reservations
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "szoba_foglalas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "szobaID")]
    pub room_id: i32,
    #[sea_orm(primary_key, auto_increment = false, column_name = "foglalasID")]
    pub reservation_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
