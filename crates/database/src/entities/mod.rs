pub mod hotel;
pub mod hotel_restaurant;
pub mod reservation;
pub mod restaurant;
pub mod room;
pub mod room_reservation;
