use crate::{
    db::{DatabaseConfig, create_connection},
    entities::{hotel, hotel_restaurant, reservation, restaurant, room, room_reservation},
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

/// An in-memory database with the hotel schema and no rows
pub async fn seeded_db() -> DatabaseConnection {
    let db = create_connection(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

pub async fn hotel(db: &DatabaseConnection, id: i32, name: &str) {
    hotel::Entity::insert(hotel::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
    })
    .exec_without_returning(db)
    .await
    .expect("insert hotel");
}

pub async fn room(db: &DatabaseConnection, id: i32, hotel_id: i32, beds: i32) {
    room::Entity::insert(room::ActiveModel {
        id: Set(id),
        hotel_id: Set(hotel_id),
        beds: Set(beds),
    })
    .exec_without_returning(db)
    .await
    .expect("insert room");
}

pub async fn reservation(db: &DatabaseConnection, id: i32, start: &str, end: &str) {
    reservation::Entity::insert(reservation::ActiveModel {
        id: Set(id),
        start_date: Set(start.to_string()),
        end_date: Set(end.to_string()),
    })
    .exec_without_returning(db)
    .await
    .expect("insert reservation");
}

pub async fn link_room(db: &DatabaseConnection, room_id: i32, reservation_id: i32) {
    room_reservation::Entity::insert(room_reservation::ActiveModel {
        room_id: Set(room_id),
        reservation_id: Set(reservation_id),
    })
    .exec_without_returning(db)
    .await
    .expect("insert room reservation");
}

pub async fn restaurant(db: &DatabaseConnection, id: i32, kind: &str) {
    restaurant::Entity::insert(restaurant::ActiveModel {
        id: Set(id),
        kind: Set(kind.to_string()),
    })
    .exec_without_returning(db)
    .await
    .expect("insert restaurant");
}

pub async fn link_restaurant(db: &DatabaseConnection, hotel_id: i32, restaurant_id: i32) {
    hotel_restaurant::Entity::insert(hotel_restaurant::ActiveModel {
        hotel_id: Set(hotel_id),
        restaurant_id: Set(restaurant_id),
    })
    .exec_without_returning(db)
    .await
    .expect("insert hotel restaurant");
}
