use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::BookingConfirmation;
use crate::{BookingError, BookingResult};

/// Review status of a booking request on the staff dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn tag(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for RequestStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "approved" => Ok(RequestStatus::Approved),
            "rejected" => Ok(RequestStatus::Rejected),
            "completed" => Ok(RequestStatus::Completed),
            "cancelled" => Ok(RequestStatus::Cancelled),
            other => Err(BookingError::UnknownStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: String,
    pub code: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub room_type: String,
    pub room_number: Option<String>,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u8,
    pub total_amount: i64,
    pub status: RequestStatus,
    pub created_at: NaiveDateTime,
    pub notes: Option<String>,
}

/// Booking requests awaiting or past staff review
pub struct RequestQueue {
    requests: Vec<BookingRequest>,
}

impl RequestQueue {
    pub fn new(requests: Vec<BookingRequest>) -> Self {
        Self { requests }
    }

    pub fn with_fixture() -> Self {
        Self::new(fixture_requests())
    }

    pub fn requests(&self) -> &[BookingRequest] {
        &self.requests
    }

    pub fn get(&self, request_id: &str) -> Option<&BookingRequest> {
        self.requests.iter().find(|request| request.id == request_id)
    }

    /// Requests whose code, customer name or email contain `search`
    /// (case-insensitive), optionally limited to one status
    pub fn filter(&self, search: &str, status: Option<RequestStatus>) -> Vec<&BookingRequest> {
        let needle = search.to_lowercase();

        self.requests
            .iter()
            .filter(|request| {
                request.code.to_lowercase().contains(&needle)
                    || request.customer_name.to_lowercase().contains(&needle)
                    || request.customer_email.to_lowercase().contains(&needle)
            })
            .filter(|request| status.map_or(true, |wanted| request.status == wanted))
            .collect()
    }

    pub fn pending(&self) -> Vec<&BookingRequest> {
        self.filter("", Some(RequestStatus::Pending))
    }

    pub fn approved(&self) -> Vec<&BookingRequest> {
        self.filter("", Some(RequestStatus::Approved))
    }

    /// Queue a website booking for review
    pub fn enqueue(&mut self, confirmation: &BookingConfirmation) -> &BookingRequest {
        let id = self
            .requests
            .iter()
            .filter_map(|request| request.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let special_requests = confirmation.special_requests.trim();
        self.requests.push(BookingRequest {
            id: id.to_string(),
            code: confirmation.code.clone(),
            customer_name: confirmation.guest_name.clone(),
            customer_email: confirmation.email.clone(),
            customer_phone: confirmation.phone.clone(),
            room_type: confirmation.room_name.clone(),
            room_number: None,
            check_in: confirmation.check_in,
            check_out: confirmation.check_out,
            guests: confirmation.guests,
            total_amount: confirmation.quote.total,
            status: RequestStatus::Pending,
            created_at: confirmation.created_at.naive_utc(),
            notes: (!special_requests.is_empty()).then(|| special_requests.to_string()),
        });

        tracing::info!("Queued booking {} for review", confirmation.code);
        &self.requests[self.requests.len() - 1]
    }

    /// Transition: Pending → Approved
    pub fn approve(&mut self, request_id: &str) -> BookingResult<&BookingRequest> {
        let request = self.get_pending_mut(request_id, RequestStatus::Approved)?;
        request.status = RequestStatus::Approved;

        tracing::info!("Approved booking {}", request.code);
        Ok(request)
    }

    /// Transition: Pending → Rejected. The reason replaces the request notes.
    pub fn reject(&mut self, request_id: &str, reason: &str) -> BookingResult<&BookingRequest> {
        if reason.trim().is_empty() {
            return Err(BookingError::RejectReasonRequired);
        }

        let request = self.get_pending_mut(request_id, RequestStatus::Rejected)?;
        request.status = RequestStatus::Rejected;
        request.notes = Some(reason.trim().to_string());

        tracing::info!("Rejected booking {}: {}", request.code, reason.trim());
        Ok(request)
    }

    fn get_pending_mut(&mut self, request_id: &str, to: RequestStatus) -> BookingResult<&mut BookingRequest> {
        let request = self
            .requests
            .iter_mut()
            .find(|request| request.id == request_id)
            .ok_or_else(|| BookingError::RequestNotFound(request_id.to_string()))?;

        if request.status != RequestStatus::Pending {
            return Err(BookingError::InvalidTransition {
                from: request.status.to_string(),
                to: to.to_string(),
            });
        }
        Ok(request)
    }
}

impl Default for RequestQueue {
    fn default() -> Self {
        Self::with_fixture()
    }
}

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_default()
}

fn timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M").unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: &str,
    customer: (&str, &str, &str),
    room_type: &str,
    room_number: Option<&str>,
    stay: (&str, &str),
    guests: u8,
    total_amount: i64,
    status: RequestStatus,
    created_at: &str,
    notes: Option<&str>,
) -> BookingRequest {
    BookingRequest {
        id: id.to_string(),
        code: format!("BK{:0>3}", id),
        customer_name: customer.0.to_string(),
        customer_email: customer.1.to_string(),
        customer_phone: customer.2.to_string(),
        room_type: room_type.to_string(),
        room_number: room_number.map(str::to_string),
        check_in: date(stay.0),
        check_out: date(stay.1),
        guests,
        total_amount,
        status,
        created_at: timestamp(created_at),
        notes: notes.map(str::to_string),
    }
}

pub fn fixture_requests() -> Vec<BookingRequest> {
    vec![
        request(
            "1",
            ("Nguyen Van A", "nguyenvana@email.com", "0901234567"),
            "Deluxe Ocean View",
            Some("301"),
            ("2024-10-28", "2024-10-30"),
            2,
            2_900_000,
            RequestStatus::Pending,
            "2024-10-26 14:30",
            Some("High floor preferred"),
        ),
        request(
            "2",
            ("Tran Thi B", "tranthib@email.com", "0912345678"),
            "Standard Room",
            Some("205"),
            ("2024-10-27", "2024-10-29"),
            2,
            1_700_000,
            RequestStatus::Approved,
            "2024-10-25 10:15",
            None,
        ),
        request(
            "3",
            ("Le Van C", "levanc@email.com", "0923456789"),
            "Presidential Suite",
            None,
            ("2024-10-29", "2024-11-01"),
            4,
            8_400_000,
            RequestStatus::Pending,
            "2024-10-26 16:45",
            Some("VIP guest"),
        ),
        request(
            "4",
            ("Pham Thi D", "phamthid@email.com", "0934567890"),
            "Deluxe Family Room",
            Some("402"),
            ("2024-10-26", "2024-10-28"),
            4,
            3_360_000,
            RequestStatus::Completed,
            "2024-10-24 09:20",
            None,
        ),
        request(
            "5",
            ("Hoang Van E", "hoangvane@email.com", "0945678901"),
            "Standard Room",
            None,
            ("2024-10-30", "2024-11-02"),
            2,
            1_950_000,
            RequestStatus::Rejected,
            "2024-10-26 11:30",
            Some("No rooms available"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(requests: &[&BookingRequest]) -> Vec<String> {
        requests.iter().map(|request| request.code.clone()).collect()
    }

    #[test]
    fn test_fixture_codes() {
        let queue = RequestQueue::with_fixture();
        assert_eq!(queue.requests()[0].code, "BK001");
        assert_eq!(queue.get("5").unwrap().code, "BK005");
    }

    #[test]
    fn test_filter_by_search_and_status() {
        let queue = RequestQueue::with_fixture();

        assert_eq!(codes(&queue.filter("TRAN", None)), vec!["BK002"]);
        assert_eq!(codes(&queue.filter("bk00", Some(RequestStatus::Pending))), vec!["BK001", "BK003"]);
        assert_eq!(codes(&queue.filter("levanc@", None)), vec!["BK003"]);
        assert_eq!(queue.filter("", None).len(), 5);
        assert_eq!(codes(&queue.approved()), vec!["BK002"]);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("approved".parse::<RequestStatus>().unwrap(), RequestStatus::Approved);
        assert!(matches!(
            "archived".parse::<RequestStatus>(),
            Err(BookingError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_approve_pending() {
        let mut queue = RequestQueue::with_fixture();

        let approved = queue.approve("1").unwrap();
        assert_eq!(approved.status, RequestStatus::Approved);
        assert_eq!(queue.pending().len(), 1);

        // Only pending requests can be reviewed
        assert!(matches!(
            queue.approve("1"),
            Err(BookingError::InvalidTransition { .. })
        ));
        assert!(matches!(queue.approve("4"), Err(BookingError::InvalidTransition { .. })));
        assert!(matches!(queue.approve("9"), Err(BookingError::RequestNotFound(_))));
    }

    #[test]
    fn test_enqueue_website_booking() {
        use crate::models::{BookingForm, BookingSubmission};
        use paradise_catalog::{PricingEngine, RoomCatalog};

        let catalog = RoomCatalog::with_fixture();
        let room = catalog.get("3").unwrap();
        let form = BookingForm {
            first_name: "Vo".to_string(),
            last_name: "Thi F".to_string(),
            email: "vothif@email.com".to_string(),
            phone: "0956789012".to_string(),
            special_requests: "Late check-in".to_string(),
            ..BookingForm::default()
        };
        let submission = BookingSubmission {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            quote: PricingEngine::default().quote(room, form.check_in, form.check_out),
            form,
        };
        let confirmation = BookingConfirmation::new(&submission);

        let mut queue = RequestQueue::with_fixture();
        let queued = queue.enqueue(&confirmation);
        assert_eq!(queued.id, "6");
        assert_eq!(queued.status, RequestStatus::Pending);
        assert_eq!(queued.customer_name, "Vo Thi F");
        assert_eq!(queued.notes.as_deref(), Some("Late check-in"));

        assert_eq!(queue.pending().len(), 3);
        let code = confirmation.code.clone();
        assert_eq!(queue.approve("6").unwrap().code, code);
    }

    #[test]
    fn test_reject_requires_reason() {
        let mut queue = RequestQueue::with_fixture();

        assert!(matches!(queue.reject("3", "   "), Err(BookingError::RejectReasonRequired)));
        assert_eq!(queue.get("3").unwrap().status, RequestStatus::Pending);

        let rejected = queue.reject("3", "Suite under renovation").unwrap();
        assert_eq!(rejected.status, RequestStatus::Rejected);
        assert_eq!(rejected.notes.as_deref(), Some("Suite under renovation"));
    }
}
