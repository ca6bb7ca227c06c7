use std::cmp::Reverse;

use crate::filter::{FilterState, SortKey};
use crate::room::Room;

/// Rooms matching every active predicate in `filters`, ordered by `filters.sort_by`.
///
/// Neither input is modified. Sorting is stable, so rooms that compare equal
/// keep their catalog order.
pub fn filter_and_sort(rooms: &[Room], filters: &FilterState) -> Vec<Room> {
    let needle = filters.search.to_lowercase();

    let mut matched: Vec<Room> = rooms
        .iter()
        .filter(|room| matches(room, filters, &needle))
        .cloned()
        .collect();

    sort_rooms(&mut matched, filters.sort_by);

    tracing::debug!(
        total = rooms.len(),
        matched = matched.len(),
        sort_by = filters.sort_by.tag(),
        "Filtered room catalog"
    );

    matched
}

fn matches(room: &Room, filters: &FilterState, needle: &str) -> bool {
    if !needle.is_empty() && !room.matches_text(needle) {
        return false;
    }

    filters.price_range.contains(room.price)
        && filters.room_type.matches(room.room_type)
        && filters.rating.matches(room.rating)
        && room.has_amenities(&filters.amenities)
}

pub fn sort_rooms(rooms: &mut [Room], sort_by: SortKey) {
    match sort_by {
        SortKey::PriceLow => rooms.sort_by_key(|room| room.price),
        SortKey::PriceHigh => rooms.sort_by_key(|room| Reverse(room.price)),
        SortKey::Rating => rooms.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Popular => rooms.sort_by_key(|room| Reverse(room.reviews)),
    }
}
