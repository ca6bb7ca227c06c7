pub mod admin;
pub mod auth;
pub mod bookings;
pub mod error;
pub mod search;
pub mod staff;
pub mod state;

pub use error::{AppError, AppResult};
pub use state::AppState;
