use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use paradise_shared::Amenity;
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::{CatalogError, CatalogResult};

/// Room categories sold on the booking site
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Presidential,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Presidential => "presidential",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RoomType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room_type| room_type.tag() == s)
            .ok_or_else(|| CatalogError::UnknownRoomType(s.to_string()))
    }
}

/// A bookable room as listed on the site. Entries are never mutated once the
/// catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub image: String,
    /// Nightly price in whole VND
    pub price: i64,
    pub original_price: Option<i64>,
    pub rating: f64,
    pub reviews: u32,
    pub size: String,
    pub guests: u32,
    pub amenities: BTreeSet<Amenity>,
    pub description: String,
    pub available: bool,
    /// Discount percentage shown on the card
    pub discount: Option<u8>,
}

impl Room {
    /// Amount saved against the crossed-out price, if any
    pub fn savings(&self) -> Option<i64> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    pub fn has_amenities(&self, required: &BTreeSet<Amenity>) -> bool {
        required.is_subset(&self.amenities)
    }

    /// `needle` must already be lowercase.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.room_type.tag().contains(needle)
    }
}

/// The fixed list of rooms the booking view searches over
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    rooms: Vec<Room>,
}

impl RoomCatalog {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Catalog seeded with the six showcase rooms
    pub fn with_fixture() -> Self {
        Self::new(fixture_rooms())
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, room_id: &str) -> CatalogResult<&Room> {
        self.rooms
            .iter()
            .find(|room| room.id == room_id)
            .ok_or_else(|| CatalogError::RoomNotFound(room_id.to_string()))
    }

    pub fn search(&self, filters: &FilterState) -> Vec<Room> {
        crate::search::filter_and_sort(&self.rooms, filters)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::with_fixture()
    }
}

const STANDARD_IMAGE: &str = "https://images.unsplash.com/photo-1648383228240-6ed939727ad6?w=1080";
const DELUXE_IMAGE: &str = "https://images.unsplash.com/photo-1560703652-7838c2525e2f?w=1080";
const SUITE_IMAGE: &str = "https://images.unsplash.com/photo-1626868449668-fb47a048d9cb?w=1080";

fn amenities(tags: &[Amenity]) -> BTreeSet<Amenity> {
    tags.iter().copied().collect()
}

pub fn fixture_rooms() -> Vec<Room> {
    use Amenity::*;

    vec![
        Room {
            id: "1".to_string(),
            name: "Standard Deluxe Room".to_string(),
            room_type: RoomType::Standard,
            image: STANDARD_IMAGE.to_string(),
            price: 850_000,
            original_price: Some(1_000_000),
            rating: 4.2,
            reviews: 128,
            size: "25m²".to_string(),
            guests: 2,
            amenities: amenities(&[Wifi, Tv, Ac, Bathroom]),
            description: "Spacious standard room with a modern design and a city view.".to_string(),
            available: true,
            discount: Some(15),
        },
        Room {
            id: "2".to_string(),
            name: "Deluxe Ocean View Room".to_string(),
            room_type: RoomType::Deluxe,
            image: DELUXE_IMAGE.to_string(),
            price: 1_450_000,
            original_price: None,
            rating: 4.6,
            reviews: 89,
            size: "35m²".to_string(),
            guests: 3,
            amenities: amenities(&[Wifi, Tv, Ac, Bathroom, Parking]),
            description: "Premium deluxe room with a private balcony facing the sea.".to_string(),
            available: true,
            discount: None,
        },
        Room {
            id: "3".to_string(),
            name: "Presidential Suite".to_string(),
            room_type: RoomType::Suite,
            image: SUITE_IMAGE.to_string(),
            price: 2_800_000,
            original_price: None,
            rating: 4.9,
            reviews: 45,
            size: "65m²".to_string(),
            guests: 4,
            amenities: amenities(&[Wifi, Tv, Ac, Bathroom, Parking, Restaurant]),
            description: "Separate living room, master bedroom, panoramic balcony and 24/7 butler.".to_string(),
            available: true,
            discount: None,
        },
        Room {
            id: "4".to_string(),
            name: "Standard Garden Room".to_string(),
            room_type: RoomType::Standard,
            image: STANDARD_IMAGE.to_string(),
            price: 650_000,
            original_price: None,
            rating: 4.0,
            reviews: 156,
            size: "22m²".to_string(),
            guests: 2,
            amenities: amenities(&[Wifi, Tv, Ac, Bathroom]),
            description: "Quiet standard room overlooking the garden.".to_string(),
            available: false,
            discount: None,
        },
        Room {
            id: "5".to_string(),
            name: "Deluxe Family Room".to_string(),
            room_type: RoomType::Deluxe,
            image: DELUXE_IMAGE.to_string(),
            price: 1_680_000,
            original_price: Some(1_800_000),
            rating: 4.4,
            reviews: 72,
            size: "42m²".to_string(),
            guests: 4,
            amenities: amenities(&[Wifi, Tv, Ac, Bathroom, Parking]),
            description: "Two double beds and a separate living area, suited to families.".to_string(),
            available: true,
            discount: Some(7),
        },
        Room {
            id: "6".to_string(),
            name: "Executive Suite".to_string(),
            room_type: RoomType::Suite,
            image: SUITE_IMAGE.to_string(),
            price: 2_200_000,
            original_price: None,
            rating: 4.7,
            reviews: 63,
            size: "55m²".to_string(),
            guests: 3,
            amenities: amenities(&[Wifi, Tv, Ac, Bathroom, Parking, Restaurant]),
            description: "Suite with a private workspace and a small meeting room.".to_string(),
            available: true,
            discount: None,
        },
    ]
}
