use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amenities a room can advertise. The vocabulary is closed: unknown tags
/// are rejected at parse time instead of falling back to a default icon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Wifi,
    Tv,
    Ac,
    Bathroom,
    Parking,
    Restaurant,
}

impl Amenity {
    pub const ALL: [Amenity; 6] = [
        Amenity::Wifi,
        Amenity::Parking,
        Amenity::Restaurant,
        Amenity::Tv,
        Amenity::Bathroom,
        Amenity::Ac,
    ];

    /// Wire tag, as used in filter queries and serialized rooms
    pub fn tag(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Tv => "tv",
            Amenity::Ac => "ac",
            Amenity::Bathroom => "bathroom",
            Amenity::Parking => "parking",
            Amenity::Restaurant => "restaurant",
        }
    }

    /// Icon identifier rendered next to the amenity
    pub fn icon(&self) -> &'static str {
        match self {
            Amenity::Wifi => "wifi",
            Amenity::Tv => "tv",
            Amenity::Ac => "wind",
            Amenity::Bathroom => "bath",
            Amenity::Parking => "car",
            Amenity::Restaurant => "utensils",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Amenity::Wifi => "Free WiFi",
            Amenity::Tv => "Flat-screen TV",
            Amenity::Ac => "Air conditioning",
            Amenity::Bathroom => "Private bathroom",
            Amenity::Parking => "Parking",
            Amenity::Restaurant => "Restaurant",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown amenity tag: {0}")]
pub struct UnknownAmenity(pub String);

impl FromStr for Amenity {
    type Err = UnknownAmenity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amenity::ALL
            .into_iter()
            .find(|amenity| amenity.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAmenity(s.to_string()))
    }
}
