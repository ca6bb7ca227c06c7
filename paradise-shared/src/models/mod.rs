pub mod amenity;
pub mod events;
pub mod user;
