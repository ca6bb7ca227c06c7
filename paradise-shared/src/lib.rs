pub mod models;
pub mod pii;

pub use models::amenity::{Amenity, UnknownAmenity};
pub use models::events::DomainEvent;
pub use models::user::{Role, User};
pub use pii::Masked;
