use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{CatalogError, CatalogResult};

/// Housekeeping state of a physical room
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
    Reserved,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 5] = [
        RoomStatus::Available,
        RoomStatus::Occupied,
        RoomStatus::Cleaning,
        RoomStatus::Maintenance,
        RoomStatus::Reserved,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Reserved => "reserved",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RoomStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomStatus::ALL
            .into_iter()
            .find(|status| status.tag() == s)
            .ok_or_else(|| CatalogError::UnknownRoomStatus(s.to_string()))
    }
}

/// A numbered room on the staff room board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomUnit {
    pub id: String,
    pub room_number: String,
    pub room_type: String,
    pub floor: u8,
    pub status: RoomStatus,
    pub current_guest: Option<String>,
    pub check_out: Option<String>,
    pub price: i64,
    pub last_cleaned: Option<NaiveDateTime>,
}

/// In-memory room board for the front desk
pub struct RoomBoard {
    units: Vec<RoomUnit>,
}

impl RoomBoard {
    pub fn new(units: Vec<RoomUnit>) -> Self {
        Self { units }
    }

    pub fn with_fixture() -> Self {
        Self::new(fixture_units())
    }

    pub fn units(&self) -> &[RoomUnit] {
        &self.units
    }

    pub fn get(&self, unit_id: &str) -> Option<&RoomUnit> {
        self.units.iter().find(|unit| unit.id == unit_id)
    }

    /// Units matching the search text (number, type or guest name) and the
    /// optional status and floor filters
    pub fn filter(&self, search: &str, status: Option<RoomStatus>, floor: Option<u8>) -> Vec<&RoomUnit> {
        let needle = search.to_lowercase();

        self.units
            .iter()
            .filter(|unit| {
                needle.is_empty()
                    || unit.room_number.to_lowercase().contains(&needle)
                    || unit.room_type.to_lowercase().contains(&needle)
                    || unit
                        .current_guest
                        .as_ref()
                        .is_some_and(|guest| guest.to_lowercase().contains(&needle))
            })
            .filter(|unit| status.map_or(true, |wanted| unit.status == wanted))
            .filter(|unit| floor.map_or(true, |wanted| unit.floor == wanted))
            .collect()
    }

    /// Count of units per status; every status is present, possibly with zero
    pub fn stats(&self) -> BTreeMap<RoomStatus, usize> {
        let mut stats: BTreeMap<RoomStatus, usize> =
            RoomStatus::ALL.into_iter().map(|status| (status, 0)).collect();
        for unit in &self.units {
            *stats.entry(unit.status).or_default() += 1;
        }
        stats
    }

    /// Move a unit to `status`, returning the previous one.
    ///
    /// Leaving `Occupied` clears the guest; finishing `Cleaning` stamps `last_cleaned`.
    pub fn update_status(
        &mut self,
        unit_id: &str,
        status: RoomStatus,
        now: NaiveDateTime,
    ) -> CatalogResult<RoomStatus> {
        let unit = self
            .units
            .iter_mut()
            .find(|unit| unit.id == unit_id)
            .ok_or_else(|| CatalogError::RoomNotFound(unit_id.to_string()))?;

        let previous = unit.status;
        if previous == status {
            return Ok(previous);
        }

        if previous == RoomStatus::Occupied {
            unit.current_guest = None;
        }
        if previous == RoomStatus::Cleaning && status == RoomStatus::Available {
            unit.last_cleaned = Some(now);
        }
        unit.status = status;

        tracing::info!(
            room_number = %unit.room_number,
            from = %previous,
            to = %status,
            "Room status updated"
        );

        Ok(previous)
    }
}

impl Default for RoomBoard {
    fn default() -> Self {
        Self::with_fixture()
    }
}

fn stamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").ok()
}

fn unit(id: &str, number: &str, room_type: &str, floor: u8, status: RoomStatus, price: i64) -> RoomUnit {
    RoomUnit {
        id: id.to_string(),
        room_number: number.to_string(),
        room_type: room_type.to_string(),
        floor,
        status,
        current_guest: None,
        check_out: None,
        price,
        last_cleaned: None,
    }
}

pub fn fixture_units() -> Vec<RoomUnit> {
    vec![
        RoomUnit {
            last_cleaned: stamp("2024-10-26 14:00"),
            ..unit("1", "101", "Standard Room", 1, RoomStatus::Available, 850_000)
        },
        RoomUnit {
            last_cleaned: stamp("2024-10-26 10:00"),
            ..unit("2", "102", "Standard Room", 1, RoomStatus::Cleaning, 850_000)
        },
        RoomUnit {
            current_guest: Some("Nguyen Van A".to_string()),
            check_out: Some("2024-10-30".to_string()),
            ..unit("3", "201", "Deluxe Ocean View", 2, RoomStatus::Occupied, 1_450_000)
        },
        RoomUnit {
            check_out: Some("2024-10-28".to_string()),
            ..unit("4", "202", "Deluxe Ocean View", 2, RoomStatus::Reserved, 1_450_000)
        },
        unit("5", "301", "Deluxe Family Room", 3, RoomStatus::Maintenance, 1_680_000),
        RoomUnit {
            last_cleaned: stamp("2024-10-26 15:30"),
            ..unit("6", "302", "Deluxe Family Room", 3, RoomStatus::Available, 1_680_000)
        },
        RoomUnit {
            current_guest: Some("Tran Thi B".to_string()),
            check_out: Some("2024-10-29".to_string()),
            ..unit("7", "401", "Executive Suite", 4, RoomStatus::Occupied, 2_200_000)
        },
        RoomUnit {
            last_cleaned: stamp("2024-10-26 16:00"),
            ..unit("8", "501", "Presidential Suite", 5, RoomStatus::Available, 2_800_000)
        },
    ]
}
