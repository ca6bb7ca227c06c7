use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::room::Room;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Bill this many nights regardless of the selected dates.
    /// `None` derives the night count from check-in and check-out.
    pub fixed_nights: Option<u32>,

    /// Flat fee per booking, in whole currency units
    pub service_fee: i64,

    /// Applied to the room total only, not the service fee
    pub tax_rate: f64,

    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            fixed_nights: Some(2),
            service_fee: 50_000,
            tax_rate: 0.1,
            currency: "VND".to_string(),
        }
    }
}

/// Price breakdown shown in the booking summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingQuote {
    pub nights: u32,
    pub nightly_rate: i64,
    pub room_total: i64,
    pub service_fee: i64,
    pub tax: i64,
    pub total: i64,
    pub currency: String,
}

#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Nights billed for a stay. Reversed or same-day dates bill one night.
    pub fn nights_for(&self, check_in: NaiveDate, check_out: NaiveDate) -> u32 {
        if let Some(fixed) = self.config.fixed_nights {
            return fixed;
        }
        let days = (check_out - check_in).num_days().max(1);
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    pub fn quote(&self, room: &Room, check_in: NaiveDate, check_out: NaiveDate) -> BookingQuote {
        let nights = self.nights_for(check_in, check_out);
        let room_total = room.price * i64::from(nights);
        let tax = (room_total as f64 * self.config.tax_rate).round() as i64;

        BookingQuote {
            nights,
            nightly_rate: room.price,
            room_total,
            service_fee: self.config.service_fee,
            tax,
            total: room_total + self.config.service_fee + tax,
            currency: self.config.currency.clone(),
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
