use paradise_booking::BookingRequest;
use paradise_catalog::RoomStatus;
use paradise_shared::DomainEvent;

use crate::error::AppResult;
use crate::state::AppState;

pub fn approve_request(state: &mut AppState, request_id: &str) -> AppResult<BookingRequest> {
    let staff = state.require_staff()?;
    let request = state.requests.approve(request_id)?.clone();

    let event = DomainEvent::BookingApproved {
        code: request.code.clone(),
    };
    state.record(&event, &staff);
    Ok(request)
}

pub fn reject_request(state: &mut AppState, request_id: &str, reason: &str) -> AppResult<BookingRequest> {
    let staff = state.require_staff()?;
    let request = state.requests.reject(request_id, reason)?.clone();

    let event = DomainEvent::BookingRejected {
        code: request.code.clone(),
        reason: reason.trim().to_string(),
    };
    state.record(&event, &staff);
    Ok(request)
}

/// Change a unit on the room board. Returns the status it had before.
pub fn update_room_status(state: &mut AppState, unit_id: &str, status: RoomStatus) -> AppResult<RoomStatus> {
    let staff = state.require_staff()?;
    let previous = state.room_board.update_status(unit_id, status, AppState::now())?;

    if previous != status {
        let room_number = state
            .room_board
            .get(unit_id)
            .map(|unit| unit.room_number.clone())
            .unwrap_or_else(|| unit_id.to_string());
        let event = DomainEvent::RoomStatusChanged {
            room_number,
            from: previous.to_string(),
            to: status.to_string(),
        };
        state.record(&event, &staff);
    }
    Ok(previous)
}
