use std::sync::Arc;

use paradise_booking::{BookingConfirmation, BookingWizard};
use paradise_shared::{DomainEvent, User};

use crate::error::AppResult;
use crate::state::AppState;

/// "Book now" on a room card: switch to the booking view and open the dialog
pub fn start_booking(state: &mut AppState, room_id: &str) -> AppResult<BookingWizard> {
    let room = state.catalog.get(room_id)?.clone();
    state.open_booking_view();

    tracing::debug!("Opened booking dialog for {}", room.name);
    Ok(BookingWizard::new(room, state.pricing.clone()))
}

/// "Cancel" in the dialog. The booking view and its filters stay open.
pub fn cancel_booking(mut wizard: BookingWizard) -> AppResult<()> {
    wizard.cancel()?;
    Ok(())
}

/// Leave the booking view; its filters are discarded
pub fn leave_booking(state: &mut AppState) {
    state.close_booking_view();
}

/// "Complete booking". The confirmed booking joins the staff review queue.
pub async fn complete_booking(
    state: &mut AppState,
    wizard: &mut BookingWizard,
) -> AppResult<BookingConfirmation> {
    let gateway = Arc::clone(&state.gateway);
    let confirmation = wizard.complete(gateway.as_ref()).await?;

    state.requests.enqueue(&confirmation);

    let actor = match state.session.user() {
        Some(user) => user.clone(),
        None => User::customer("guest", confirmation.email.clone(), confirmation.guest_name.clone()),
    };
    let event = DomainEvent::BookingSubmitted {
        booking_id: confirmation.id,
        code: confirmation.code.clone(),
        room_id: confirmation.room_id.clone(),
        total: confirmation.quote.total,
    };
    state.record(&event, &actor);

    Ok(confirmation)
}
