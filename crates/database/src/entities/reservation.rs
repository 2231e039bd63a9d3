use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dates are kept as the text the store holds, e.g. `2024-01-01`
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Foglalas")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "ID")]
    pub id: i32,
    #[sea_orm(column_name = "DatumKezd")]
    pub start_date: String,
    #[sea_orm(column_name = "DatumVeg")]
    pub end_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
