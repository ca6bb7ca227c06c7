use paradise_booking::BookingError;
use paradise_catalog::CatalogError;
use paradise_core::CoreError;
use paradise_store::StoreError;

/// Anything a user action can fail with. `Display` is the toast text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Access denied: {0}")]
    Forbidden(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;
