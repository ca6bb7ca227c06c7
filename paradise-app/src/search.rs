use paradise_catalog::{FilterQuery, FilterState, Room};

use crate::error::AppResult;
use crate::state::AppState;

/// Rooms shown in the listing. Outside the booking view the listing is unfiltered.
pub fn visible_rooms(state: &AppState) -> Vec<Room> {
    match state.booking_view() {
        Some(view) => state.catalog.search(&view.filters),
        None => state.catalog.search(&FilterState::default()),
    }
}

/// Replace the filter panel from a raw query, e.g. one read from a URL.
/// Opens the booking view if it is not showing.
pub fn apply_query(state: &mut AppState, query: FilterQuery) -> AppResult<Vec<Room>> {
    let filters = FilterState::try_from(query)?;
    state.open_booking_view().filters = filters;
    Ok(visible_rooms(state))
}

/// "Clear filters" button
pub fn clear_filters(state: &mut AppState) -> Vec<Room> {
    state.open_booking_view().filters.clear();
    visible_rooms(state)
}
