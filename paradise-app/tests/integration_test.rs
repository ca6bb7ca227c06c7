use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use paradise_app::{admin, auth, bookings, search, staff, AppError, AppState};
use paradise_booking::{
    BookingConfirmation, BookingError, BookingGateway, BookingResult, BookingSubmission, RequestStatus,
};
use paradise_catalog::{FilterQuery, FilterState, RoomStatus};
use paradise_core::{CoreError, LoginForm, SimulatedAuthService, SimulatedLatency, View};
use paradise_shared::Masked;
use paradise_store::app_config::Config;
use paradise_store::{ActivityCategory, StoreError};

fn instant_state() -> AppState {
    let config = Config::default();
    let auth = Arc::new(SimulatedAuthService::new(SimulatedLatency::none(), 6));
    let gateway = Arc::new(paradise_booking::SimulatedBookingGateway::new(SimulatedLatency::none()));
    AppState::with_services(config, auth, gateway)
}

fn fill_booking(wizard: &mut paradise_booking::BookingWizard) {
    let form = wizard.form_mut();
    form.first_name = "Vo".to_string();
    form.last_name = "Thi F".to_string();
    form.email = "vothif@email.com".to_string();
    form.phone = "0956789012".to_string();
    form.card_number = Masked::from("4111 1111 1111 1111");
    form.expiry_date = "12/27".to_string();
    form.cvv = Masked::from("123");
    form.card_name = "VO THI F".to_string();
}

struct DecliningGateway;

#[async_trait]
impl BookingGateway for DecliningGateway {
    async fn submit(&self, _submission: &BookingSubmission) -> BookingResult<BookingConfirmation> {
        Err(BookingError::GatewayError("card declined".to_string()))
    }
}

#[test]
fn test_filter_query_flow() {
    let mut state = instant_state();
    assert_eq!(search::visible_rooms(&state).len(), 6);

    let query: FilterQuery = serde_json::from_str(r#"{"priceRange":[650000,850000]}"#).unwrap();
    let rooms = search::apply_query(&mut state, query).unwrap();
    let ids: Vec<_> = rooms.iter().map(|room| room.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "1"]);

    let bad: FilterQuery = serde_json::from_str(r#"{"amenities":["spa"]}"#).unwrap();
    assert!(matches!(search::apply_query(&mut state, bad), Err(AppError::Catalog(_))));

    assert_eq!(search::clear_filters(&mut state).len(), 6);
}

#[test]
fn test_filters_reset_when_booking_view_remounts() {
    let mut state = instant_state();

    let query: FilterQuery = serde_json::from_str(r#"{"priceRange":[0,1000000]}"#).unwrap();
    assert_eq!(search::apply_query(&mut state, query).unwrap().len(), 2);
    assert_eq!(state.session.view(), View::Booking);

    // Opening a room from the listing keeps the panel
    let wizard = bookings::start_booking(&mut state, "1").unwrap();
    assert_eq!(search::visible_rooms(&state).len(), 2);
    bookings::cancel_booking(wizard).unwrap();
    assert_eq!(search::visible_rooms(&state).len(), 2);

    state.session.back_to_website();
    assert!(state.booking_view().is_none());
    assert_eq!(search::visible_rooms(&state).len(), 6);

    bookings::start_booking(&mut state, "1").unwrap();
    assert_eq!(state.booking_view().unwrap().filters, FilterState::default());
    assert_eq!(search::visible_rooms(&state).len(), 6);
}

#[test]
fn test_leave_booking_drops_filters() {
    let mut state = instant_state();

    let query: FilterQuery = serde_json::from_str(r#"{"roomType":"suite"}"#).unwrap();
    assert_eq!(search::apply_query(&mut state, query).unwrap().len(), 2);

    bookings::leave_booking(&mut state);
    assert_eq!(state.session.view(), View::Website);
    assert!(state.booking_view().is_none());

    let mut wizard = bookings::start_booking(&mut state, "3").unwrap();
    assert_eq!(search::visible_rooms(&state).len(), 6);

    // Past the first step the dialog goes back instead
    wizard.next().unwrap();
    assert!(matches!(
        bookings::cancel_booking(wizard),
        Err(AppError::Booking(BookingError::InvalidStep { action: "cancel", .. }))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_login_waits_for_simulated_backend() {
    let mut state = AppState::new(Config::default());
    let form = LoginForm {
        email: "guest@example.com".to_string(),
        password: Masked::from("secret"),
    };

    let start = tokio::time::Instant::now();
    let user = auth::login(&mut state, &form).await.unwrap();

    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(user.name, "User Demo");
    assert!(state.session.is_signed_in());
    assert_eq!(state.activity.logs()[0].category, ActivityCategory::Auth);
}

#[tokio::test]
async fn test_login_validation_message() {
    let mut state = instant_state();
    let form = LoginForm {
        email: String::new(),
        password: Masked::from("secret"),
    };

    let err = auth::login(&mut state, &form).await.unwrap_err();
    assert!(matches!(err, AppError::Core(CoreError::ValidationError(_))));
    assert_eq!(err.to_string(), "Please fill in all fields");
    assert!(!state.session.is_signed_in());
}

#[tokio::test]
async fn test_website_booking_reaches_staff_queue() {
    let mut state = instant_state();

    let mut wizard = bookings::start_booking(&mut state, "2").unwrap();
    assert_eq!(state.session.view(), View::Booking);
    fill_booking(&mut wizard);
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard.form_mut().agree_terms = true;

    let confirmation = bookings::complete_booking(&mut state, &mut wizard).await.unwrap();
    assert_eq!(confirmation.quote.total, 3_240_000);
    assert_eq!(state.activity.logs()[0].user_id, "guest");

    // Customers cannot review their own booking
    assert!(matches!(
        staff::approve_request(&mut state, "6"),
        Err(AppError::Forbidden(_))
    ));

    state.session.staff_access();
    let approved = staff::approve_request(&mut state, "6").unwrap();
    assert_eq!(approved.code, confirmation.code);
    assert_eq!(approved.status, RequestStatus::Approved);
    assert_eq!(state.activity.logs()[0].action, "Approved booking");
}

#[tokio::test]
async fn test_declined_booking_is_not_queued() {
    let config = Config::default();
    let auth = Arc::new(SimulatedAuthService::new(SimulatedLatency::none(), 6));
    let mut state = AppState::with_services(config, auth, Arc::new(DecliningGateway));

    let mut wizard = bookings::start_booking(&mut state, "1").unwrap();
    fill_booking(&mut wizard);
    wizard.next().unwrap();
    wizard.next().unwrap();
    wizard.form_mut().agree_terms = true;

    let err = bookings::complete_booking(&mut state, &mut wizard).await.unwrap_err();
    assert!(matches!(err, AppError::Booking(BookingError::GatewayError(_))));
    assert_eq!(state.requests.requests().len(), 5);
    assert_eq!(state.activity.len(), 10);
}

#[test]
fn test_unknown_room_cannot_be_booked() {
    let mut state = instant_state();
    assert!(matches!(
        bookings::start_booking(&mut state, "99"),
        Err(AppError::Catalog(_))
    ));
    assert_eq!(state.session.view(), View::Website);
}

#[test]
fn test_staff_room_status_change_is_logged() {
    let mut state = instant_state();
    state.session.staff_access();

    let previous = staff::update_room_status(&mut state, "2", RoomStatus::Available).unwrap();
    assert_eq!(previous, RoomStatus::Cleaning);
    assert_eq!(
        state.activity.logs()[0].details.as_deref(),
        Some("Room 102: cleaning -> available")
    );

    // No-op changes leave no trace
    staff::update_room_status(&mut state, "2", RoomStatus::Available).unwrap();
    assert_eq!(state.activity.len(), 11);

    let err = staff::reject_request(&mut state, "3", "").unwrap_err();
    assert_eq!(err.to_string(), "Please enter a reason for rejecting");
}

#[tokio::test]
async fn test_admin_backup_and_restore() {
    let mut state = instant_state();

    state.session.staff_access();
    assert!(matches!(admin::backup_now(&mut state).await, Err(AppError::Forbidden(_))));

    state.session.admin_access();
    assert_eq!(admin::activity_stats(&state).unwrap().total, 10);

    let record = admin::backup_now(&mut state).await.unwrap();
    assert!(matches!(
        admin::restore(&mut state, record.id, false),
        Err(AppError::Store(StoreError::RestoreNotConfirmed))
    ));
    assert!(matches!(
        admin::restore(&mut state, uuid::Uuid::nil(), true),
        Err(AppError::Store(StoreError::BackupNotFound(_)))
    ));

    let restored = admin::restore(&mut state, record.id, true).unwrap();
    assert_eq!(restored, 10);
    assert_eq!(admin::activity_stats(&state).unwrap().total, 11);

    auth::logout(&mut state);
    assert_eq!(state.session.view(), View::Website);
    assert!(admin::activity_stats(&state).is_err());
}
