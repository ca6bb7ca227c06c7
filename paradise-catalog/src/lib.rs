pub mod room;
pub mod filter;
pub mod search;
pub mod pricing;
pub mod inventory;

pub use room::{Room, RoomCatalog, RoomType};
pub use filter::{FilterQuery, FilterState, MinRating, PriceRange, RoomTypeFilter, SortKey};
pub use search::filter_and_sort;
pub use pricing::{BookingQuote, PricingConfig, PricingEngine};
pub use inventory::{RoomBoard, RoomStatus, RoomUnit};

use paradise_shared::UnknownAmenity;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    UnknownAmenity(#[from] UnknownAmenity),

    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown room status: {0}")]
    UnknownRoomStatus(String),

    #[error("Invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: i64, max: i64 },

    #[error("Room not found: {0}")]
    RoomNotFound(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
