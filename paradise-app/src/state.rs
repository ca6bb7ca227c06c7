use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use paradise_booking::{BookingGateway, RequestQueue, SimulatedBookingGateway};
use paradise_catalog::{FilterState, PricingEngine, RoomBoard, RoomCatalog};
use paradise_core::{AuthService, Session, SimulatedAuthService, View};
use paradise_shared::{DomainEvent, Role, User};
use paradise_store::app_config::Config;
use paradise_store::{ActivityLogStore, BackupRecord, BackupService};

use crate::error::{AppError, AppResult};

/// State owned by the booking view. Built when the view opens, dropped when it closes.
#[derive(Debug, Default)]
pub struct BookingView {
    pub filters: FilterState,
}

/// Everything one running application instance holds
pub struct AppState {
    pub config: Config,
    pub catalog: RoomCatalog,
    pub pricing: PricingEngine,
    pub session: Session,
    booking_view: Option<BookingView>,
    pub room_board: RoomBoard,
    pub requests: RequestQueue,
    pub activity: ActivityLogStore,
    pub backups: Vec<BackupRecord>,
    pub auth: Arc<dyn AuthService>,
    pub gateway: Arc<dyn BookingGateway>,
    pub backup: BackupService,
}

impl AppState {
    /// Fixture data with the simulated services configured from `config`
    pub fn new(config: Config) -> Self {
        let auth = Arc::new(SimulatedAuthService::new(
            config.simulation.auth_latency(),
            config.auth.min_password_length,
        ));
        let gateway = Arc::new(SimulatedBookingGateway::new(config.simulation.booking_latency()));
        Self::with_services(config, auth, gateway)
    }

    pub fn with_services(
        config: Config,
        auth: Arc<dyn AuthService>,
        gateway: Arc<dyn BookingGateway>,
    ) -> Self {
        Self {
            pricing: PricingEngine::new(config.pricing.clone()),
            backup: BackupService::new(config.simulation.backup_latency()),
            catalog: RoomCatalog::with_fixture(),
            booking_view: None,
            session: Session::new(),
            room_board: RoomBoard::with_fixture(),
            requests: RequestQueue::with_fixture(),
            activity: ActivityLogStore::with_fixture(),
            backups: Vec::new(),
            auth,
            gateway,
            config,
        }
    }

    /// The open booking view, if the session is showing it
    pub fn booking_view(&self) -> Option<&BookingView> {
        if self.session.view() != View::Booking {
            return None;
        }
        self.booking_view.as_ref()
    }

    /// Switch to the booking view. A view left earlier is discarded and
    /// a fresh one starts with default filters.
    pub fn open_booking_view(&mut self) -> &mut BookingView {
        if self.session.view() != View::Booking {
            self.booking_view = None;
            self.session.open_booking();
        }
        self.booking_view.get_or_insert_with(|| {
            tracing::debug!("Booking view opened");
            BookingView::default()
        })
    }

    pub fn close_booking_view(&mut self) {
        self.booking_view = None;
        self.session.back_to_website();
    }

    pub fn now() -> NaiveDateTime {
        Utc::now().naive_utc()
    }

    /// Signed-in user with staff or admin rights
    pub fn require_staff(&self) -> AppResult<User> {
        match self.session.user() {
            Some(user) if user.is_staff() => Ok(user.clone()),
            _ => Err(AppError::Forbidden("staff account required")),
        }
    }

    pub fn require_admin(&self) -> AppResult<User> {
        match self.session.user() {
            Some(user) if user.role == Role::Admin => Ok(user.clone()),
            _ => Err(AppError::Forbidden("administrator account required")),
        }
    }

    pub fn record(&mut self, event: &DomainEvent, actor: &User) {
        self.activity.record_event(event, actor, Self::now());
    }
}
