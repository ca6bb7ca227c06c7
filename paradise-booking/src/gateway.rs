use async_trait::async_trait;
use paradise_core::SimulatedLatency;

use crate::models::{BookingConfirmation, BookingSubmission};
use crate::BookingResult;

/// Where completed booking forms are sent
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn submit(&self, submission: &BookingSubmission) -> BookingResult<BookingConfirmation>;
}

/// Confirms every submission after a fixed delay. Nothing is charged or stored.
pub struct SimulatedBookingGateway {
    latency: SimulatedLatency,
}

impl SimulatedBookingGateway {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedBookingGateway {
    fn default() -> Self {
        Self::new(SimulatedLatency::from_millis(1000))
    }
}

#[async_trait]
impl BookingGateway for SimulatedBookingGateway {
    async fn submit(&self, submission: &BookingSubmission) -> BookingResult<BookingConfirmation> {
        tracing::debug!(
            room_id = %submission.room_id,
            card = %submission.form.card_number.last_four(),
            "Submitting booking"
        );
        self.latency.wait().await;

        let confirmation = BookingConfirmation::new(submission);
        tracing::info!(
            code = %confirmation.code,
            total = confirmation.quote.total,
            "Booking confirmed, details sent to {}",
            confirmation.email
        );
        Ok(confirmation)
    }
}
