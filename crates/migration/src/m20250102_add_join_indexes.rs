use sea_orm_migration::prelude::*;

use crate::m20250101_create_hotel_tables::{HotelRestaurants, RoomReservations, Rooms};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Every report joins rooms to their hotel
        manager
            .create_index(
                Index::create()
                    .name("idx_szoba_szallodaID")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await?;

        // The composite primary keys already cover lookups by their first column
        manager
            .create_index(
                Index::create()
                    .name("idx_szoba_foglalas_foglalasID")
                    .table(RoomReservations::Table)
                    .col(RoomReservations::ReservationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_szalloda_etterem_etteremID")
                    .table(HotelRestaurants::Table)
                    .col(HotelRestaurants::RestaurantId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_szalloda_etterem_etteremID")
                    .table(HotelRestaurants::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_szoba_foglalas_foglalasID")
                    .table(RoomReservations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_szoba_szallodaID")
                    .table(Rooms::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
