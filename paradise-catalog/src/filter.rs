use std::collections::BTreeSet;
use std::str::FromStr;

use paradise_shared::Amenity;
use serde::{Deserialize, Serialize};

use crate::room::RoomType;
use crate::{CatalogError, CatalogResult};

/// Upper bound of the price slider when no filter is applied
pub const DEFAULT_MAX_PRICE: i64 = 3_000_000;

/// Inclusive nightly price bounds. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    min: i64,
    max: i64,
}

impl PriceRange {
    pub fn new(min: i64, max: i64) -> CatalogResult<Self> {
        if min > max {
            return Err(CatalogError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, price: i64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_PRICE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomTypeFilter {
    #[default]
    All,
    Only(RoomType),
}

impl RoomTypeFilter {
    pub fn matches(&self, room_type: RoomType) -> bool {
        match self {
            RoomTypeFilter::All => true,
            RoomTypeFilter::Only(wanted) => *wanted == room_type,
        }
    }
}

impl FromStr for RoomTypeFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(RoomTypeFilter::All),
            other => other.parse().map(RoomTypeFilter::Only),
        }
    }
}

/// Minimum-rating threshold as picked in the rating dropdown.
///
/// The threshold is read from the leading decimal number of the text, so
/// `"4.5 stars"` means 4.5. Text with no such prefix, or one that does not
/// give a finite value, keeps its raw form and matches no room.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MinRating {
    #[default]
    All,
    AtLeast(f64),
    Unparseable(String),
}

impl MinRating {
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            return MinRating::All;
        }
        match leading_number(raw).parse::<f64>() {
            Ok(threshold) if threshold.is_finite() => MinRating::AtLeast(threshold),
            _ => {
                tracing::warn!("Rating threshold {:?} is not a number; no room will match", raw);
                MinRating::Unparseable(raw.to_string())
            }
        }
    }

    pub fn matches(&self, rating: f64) -> bool {
        match self {
            MinRating::All => true,
            MinRating::AtLeast(threshold) => rating >= *threshold,
            MinRating::Unparseable(_) => false,
        }
    }
}

/// Longest prefix of `raw` (after leading whitespace) shaped like
/// `[+-]digits[.digits][e[+-]digits]`. Empty when there is none.
fn leading_number(raw: &str) -> &str {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        mantissa_end = digits_from(int_end + 1);
    }
    // A lone sign or dot is not a number
    if mantissa_end - end <= usize::from(mantissa_end > int_end) {
        return "";
    }

    let mut number_end = mantissa_end;
    if matches!(bytes.get(mantissa_end), Some(b'e' | b'E')) {
        let mut exp = mantissa_end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            number_end = exp_end;
        }
    }
    &s[..number_end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Rating,
    #[default]
    Popular,
}

impl SortKey {
    pub fn tag(&self) -> &'static str {
        match self {
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Popular => "popular",
        }
    }

    /// Unrecognised keys fall back to `Popular`
    pub fn parse_lenient(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "rating" => Ok(SortKey::Rating),
            "popular" => Ok(SortKey::Popular),
            other => Err(CatalogError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Search and sort criteria owned by the booking view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    /// Case-insensitive substring matched against room name and type
    pub search: String,
    pub price_range: PriceRange,
    pub room_type: RoomTypeFilter,
    /// Every listed amenity must be present on the room
    pub amenities: BTreeSet<Amenity>,
    pub rating: MinRating,
    pub sort_by: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self
        }
    }

    pub fn with_price_range(self, min: i64, max: i64) -> CatalogResult<Self> {
        Ok(Self {
            price_range: PriceRange::new(min, max)?,
            ..self
        })
    }

    pub fn with_room_type(self, room_type: RoomType) -> Self {
        Self {
            room_type: RoomTypeFilter::Only(room_type),
            ..self
        }
    }

    pub fn with_amenity(mut self, amenity: Amenity) -> Self {
        self.amenities.insert(amenity);
        self
    }

    pub fn with_rating(self, raw: &str) -> Self {
        Self {
            rating: MinRating::parse(raw),
            ..self
        }
    }

    pub fn with_sort(self, sort_by: SortKey) -> Self {
        Self { sort_by, ..self }
    }

    pub fn set_price_range(&mut self, min: i64, max: i64) -> CatalogResult<()> {
        self.price_range = PriceRange::new(min, max)?;
        Ok(())
    }

    /// Checkbox behaviour: add the amenity if missing, remove it otherwise
    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if !self.amenities.remove(&amenity) {
            self.amenities.insert(amenity);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of predicates that differ from the defaults; sorting is not counted
    pub fn active_filter_count(&self) -> usize {
        [
            !self.search.is_empty(),
            self.price_range != PriceRange::default(),
            self.room_type != RoomTypeFilter::All,
            !self.amenities.is_empty(),
            self.rating != MinRating::All,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Filter state as the frontend sends it: plain strings and a two-element price array
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_price_range")]
    pub price_range: [i64; 2],
    #[serde(default = "default_all")]
    pub room_type: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default = "default_all")]
    pub rating: String,
    #[serde(default)]
    pub sort_by: String,
}

fn default_price_range() -> [i64; 2] {
    [0, DEFAULT_MAX_PRICE]
}

fn default_all() -> String {
    "all".to_string()
}

impl TryFrom<FilterQuery> for FilterState {
    type Error = CatalogError;

    fn try_from(query: FilterQuery) -> Result<Self, Self::Error> {
        let amenities = query
            .amenities
            .iter()
            .map(|tag| tag.parse::<Amenity>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(FilterState {
            search: query.search,
            price_range: PriceRange::new(query.price_range[0], query.price_range[1])?,
            room_type: query.room_type.parse()?,
            amenities,
            rating: MinRating::parse(&query.rating),
            sort_by: SortKey::parse_lenient(&query.sort_by),
        })
    }
}
