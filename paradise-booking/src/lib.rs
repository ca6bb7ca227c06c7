pub mod models;
pub mod wizard;
pub mod gateway;
pub mod requests;

pub use models::{BookingConfirmation, BookingForm, BookingStep, BookingSubmission};
pub use wizard::BookingWizard;
pub use gateway::{BookingGateway, SimulatedBookingGateway};
pub use requests::{BookingRequest, RequestQueue, RequestStatus};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Please fill in {0}")]
    MissingField(&'static str),

    #[error("Guests must be between 1 and {max}, got {got}")]
    InvalidGuestCount { got: u8, max: u8 },

    #[error("Please accept the terms of use")]
    TermsNotAccepted,

    #[error("Cannot {action} from step {from:?}")]
    InvalidStep {
        from: BookingStep,
        action: &'static str,
    },

    #[error("Booking request not found: {0}")]
    RequestNotFound(String),

    #[error("Unknown booking status: {0}")]
    UnknownStatus(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Please enter a reason for rejecting")]
    RejectReasonRequired,

    #[error("Booking submission failed: {0}")]
    GatewayError(String),
}

pub type BookingResult<T> = Result<T, BookingError>;
