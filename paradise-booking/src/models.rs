use chrono::{DateTime, NaiveDate, Utc};
use paradise_catalog::BookingQuote;
use paradise_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Steps of the booking dialog, in order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    #[default]
    Details,
    PersonalInfo,
    Payment,
}

impl BookingStep {
    /// 1-based position shown in the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::Details => 1,
            BookingStep::PersonalInfo => 2,
            BookingStep::Payment => 3,
        }
    }

    pub fn next(&self) -> Option<BookingStep> {
        match self {
            BookingStep::Details => Some(BookingStep::PersonalInfo),
            BookingStep::PersonalInfo => Some(BookingStep::Payment),
            BookingStep::Payment => None,
        }
    }

    pub fn previous(&self) -> Option<BookingStep> {
        match self {
            BookingStep::Details => None,
            BookingStep::PersonalInfo => Some(BookingStep::Details),
            BookingStep::Payment => Some(BookingStep::PersonalInfo),
        }
    }
}

pub const MAX_GUESTS: u8 = 4;

/// Everything the booking dialog collects across its three steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingForm {
    // Details
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
    pub special_requests: String,

    // Personal info
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub country: String,

    // Payment
    pub card_number: Masked<String>,
    pub expiry_date: String,
    pub cvv: Masked<String>,
    pub card_name: String,
    pub agree_terms: bool,
    pub newsletter: bool,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            check_in: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default(),
            check_out: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap_or_default(),
            guests: 2,
            special_requests: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            country: "Vietnam".to_string(),
            card_number: Masked::default(),
            expiry_date: String::new(),
            cvv: Masked::default(),
            card_name: String::new(),
            agree_terms: false,
            newsletter: false,
        }
    }
}

impl BookingForm {
    pub fn guest_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// What the wizard hands to the gateway on completion
#[derive(Debug, Clone, Serialize)]
pub struct BookingSubmission {
    pub room_id: String,
    pub room_name: String,
    pub form: BookingForm,
    pub quote: BookingQuote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: Uuid,
    /// Short code quoted to the guest, e.g. BK3F9A1C
    pub code: String,
    pub room_id: String,
    pub room_name: String,
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
    pub special_requests: String,
    pub quote: BookingQuote,
    pub created_at: DateTime<Utc>,
}

impl BookingConfirmation {
    pub fn new(submission: &BookingSubmission) -> Self {
        let id = Uuid::new_v4();
        let code = format!("BK{}", id.simple().to_string()[..6].to_uppercase());

        Self {
            id,
            code,
            room_id: submission.room_id.clone(),
            room_name: submission.room_name.clone(),
            guest_name: submission.form.guest_name(),
            email: submission.form.email.clone(),
            phone: submission.form.phone.clone(),
            check_in: submission.form.check_in,
            check_out: submission.form.check_out,
            guests: submission.form.guests,
            special_requests: submission.form.special_requests.clone(),
            quote: submission.quote.clone(),
            created_at: Utc::now(),
        }
    }
}
