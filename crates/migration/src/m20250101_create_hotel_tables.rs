use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create hotels table
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotels::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hotels::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Rooms::Id).integer().not_null().primary_key())
                    .col(ColumnDef::new(Rooms::HotelId).integer().not_null())
                    .col(ColumnDef::new(Rooms::Beds).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-szoba-szallodaID")
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create reservations table
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::StartDate).string().not_null())
                    .col(ColumnDef::new(Reservations::EndDate).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create room_reservations junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(RoomReservations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RoomReservations::RoomId).integer().not_null())
                    .col(
                        ColumnDef::new(RoomReservations::ReservationId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(RoomReservations::RoomId)
                            .col(RoomReservations::ReservationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-szoba_foglalas-szobaID")
                            .from(RoomReservations::Table, RoomReservations::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-szoba_foglalas-foglalasID")
                            .from(RoomReservations::Table, RoomReservations::ReservationId)
                            .to(Reservations::Table, Reservations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create restaurants table
        manager
            .create_table(
                Table::create()
                    .table(Restaurants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurants::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurants::Kind).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create hotel_restaurants junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(HotelRestaurants::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(HotelRestaurants::HotelId).integer().not_null())
                    .col(
                        ColumnDef::new(HotelRestaurants::RestaurantId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(HotelRestaurants::HotelId)
                            .col(HotelRestaurants::RestaurantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-szalloda_etterem-szallodaID")
                            .from(HotelRestaurants::Table, HotelRestaurants::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-szalloda_etterem-etteremID")
                            .from(HotelRestaurants::Table, HotelRestaurants::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Junction tables go first so no foreign key is left dangling
        manager
            .drop_table(Table::drop().table(HotelRestaurants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Restaurants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RoomReservations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
pub(crate) enum Hotels {
    #[iden = "Szalloda"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "szalloda"]
    Name,
}

#[derive(Iden)]
pub(crate) enum Rooms {
    #[iden = "Szoba"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "szallodaID"]
    HotelId,
    #[iden = "agy"]
    Beds,
}

#[derive(Iden)]
pub(crate) enum Reservations {
    #[iden = "Foglalas"]
    Table,
    #[iden = "ID"]
    Id,
    #[iden = "DatumKezd"]
    StartDate,
    #[iden = "DatumVeg"]
    EndDate,
}

#[derive(Iden)]
pub(crate) enum RoomReservations {
    #[iden = "szoba_foglalas"]
    Table,
    #[iden = "szobaID"]
    RoomId,
    #[iden = "foglalasID"]
    ReservationId,
}

#[derive(Iden)]
pub(crate) enum Restaurants {
    #[iden = "etterem"]
    Table,
    #[iden = "id"]
    Id,
    #[iden = "tipus"]
    Kind,
}

#[derive(Iden)]
pub(crate) enum HotelRestaurants {
    #[iden = "szalloda_etterem"]
    Table,
    #[iden = "szallodaID"]
    HotelId,
    #[iden = "etteremID"]
    RestaurantId,
}
