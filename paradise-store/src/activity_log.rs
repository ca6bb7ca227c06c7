use std::fmt;

use chrono::NaiveDateTime;
use paradise_shared::{DomainEvent, Role, User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Auth,
    Booking,
    Room,
    User,
    System,
    Security,
    Payment,
}

impl ActivityCategory {
    pub fn tag(&self) -> &'static str {
        match self {
            ActivityCategory::Auth => "auth",
            ActivityCategory::Booking => "booking",
            ActivityCategory::Room => "room",
            ActivityCategory::User => "user",
            ActivityCategory::System => "system",
            ActivityCategory::Security => "security",
            ActivityCategory::Payment => "payment",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Success => "success",
        };
        f.write_str(tag)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub user: String,
    pub user_id: String,
    pub role: String,
    pub action: String,
    pub category: ActivityCategory,
    pub severity: Severity,
    pub ip_address: String,
    pub user_agent: String,
    #[serde(default)]
    pub details: Option<String>,
}

/// Counters shown above the activity table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivityStats {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub security: usize,
}

/// Admin audit trail. Newest entries first.
#[derive(Debug, Clone, Default)]
pub struct ActivityLogStore {
    logs: Vec<ActivityLog>,
    next_id: u64,
}

impl ActivityLogStore {
    pub fn new(logs: Vec<ActivityLog>) -> Self {
        let next_id = logs
            .iter()
            .filter_map(|log| log.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self { logs, next_id }
    }

    pub fn with_fixture() -> Self {
        Self::new(fixture_logs())
    }

    pub fn logs(&self) -> &[ActivityLog] {
        &self.logs
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn filter(
        &self,
        search: &str,
        category: Option<ActivityCategory>,
        severity: Option<Severity>,
    ) -> Vec<&ActivityLog> {
        let needle = search.to_lowercase();

        self.logs
            .iter()
            .filter(|log| {
                log.user.to_lowercase().contains(&needle)
                    || log.action.to_lowercase().contains(&needle)
                    || log.ip_address.contains(&needle)
                    || log
                        .details
                        .as_deref()
                        .is_some_and(|details| details.to_lowercase().contains(&needle))
            })
            .filter(|log| category.map_or(true, |wanted| log.category == wanted))
            .filter(|log| severity.map_or(true, |wanted| log.severity == wanted))
            .collect()
    }

    pub fn stats(&self) -> ActivityStats {
        ActivityStats {
            total: self.logs.len(),
            errors: self.count(|log| log.severity == Severity::Error),
            warnings: self.count(|log| log.severity == Severity::Warning),
            security: self.count(|log| log.category == ActivityCategory::Security),
        }
    }

    fn count(&self, predicate: impl Fn(&ActivityLog) -> bool) -> usize {
        self.logs.iter().filter(|log| predicate(log)).count()
    }

    /// Prepend an entry, assigning the next id
    pub fn record(&mut self, mut log: ActivityLog) -> &ActivityLog {
        log.id = self.next_id.to_string();
        self.next_id += 1;

        tracing::debug!(
            category = %log.category,
            severity = %log.severity,
            "{}: {}",
            log.user,
            log.action
        );
        self.logs.insert(0, log);
        &self.logs[0]
    }

    pub fn record_event(&mut self, event: &DomainEvent, actor: &User, at: NaiveDateTime) -> &ActivityLog {
        let log = event_entry(event, at, (&actor.name, &actor.id, role_label(actor.role)), "Paradise");
        self.record(log)
    }

    /// Entry attributed to the system account rather than a person
    pub fn record_system(&mut self, event: &DomainEvent, at: NaiveDateTime) -> &ActivityLog {
        let log = event_entry(event, at, ("System", "system", "System"), "System");
        self.record(log)
    }

    /// Swap the whole trail, e.g. after a restore
    pub fn replace(&mut self, logs: Vec<ActivityLog>) {
        *self = Self::new(logs);
    }
}

fn event_entry(
    event: &DomainEvent,
    at: NaiveDateTime,
    (user, user_id, role): (&str, &str, &str),
    user_agent: &str,
) -> ActivityLog {
    let (category, severity) = classify(event);
    ActivityLog {
        id: String::new(),
        timestamp: at,
        user: user.to_string(),
        user_id: user_id.to_string(),
        role: role.to_string(),
        action: event.action().to_string(),
        category,
        severity,
        ip_address: "127.0.0.1".to_string(),
        user_agent: user_agent.to_string(),
        details: Some(event.details()),
    }
}

fn classify(event: &DomainEvent) -> (ActivityCategory, Severity) {
    match event {
        DomainEvent::UserSignedIn { .. } => (ActivityCategory::Auth, Severity::Info),
        DomainEvent::UserRegistered { .. } => (ActivityCategory::User, Severity::Info),
        DomainEvent::BookingSubmitted { .. } | DomainEvent::BookingApproved { .. } => {
            (ActivityCategory::Booking, Severity::Success)
        }
        DomainEvent::BookingRejected { .. } => (ActivityCategory::Booking, Severity::Warning),
        DomainEvent::RoomStatusChanged { .. } => (ActivityCategory::Room, Severity::Info),
        DomainEvent::BackupCompleted { .. } => (ActivityCategory::System, Severity::Success),
        DomainEvent::DataRestored { .. } => (ActivityCategory::System, Severity::Warning),
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Customer => "Customer",
        Role::Staff => "Staff",
        Role::Admin => "Admin",
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    timestamp: &str,
    (user, user_id, role): (&str, &str, &str),
    action: &str,
    category: ActivityCategory,
    severity: Severity,
    (ip_address, user_agent): (&str, &str),
    details: &str,
) -> ActivityLog {
    ActivityLog {
        id: id.to_string(),
        timestamp: NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").unwrap_or_default(),
        user: user.to_string(),
        user_id: user_id.to_string(),
        role: role.to_string(),
        action: action.to_string(),
        category,
        severity,
        ip_address: ip_address.to_string(),
        user_agent: user_agent.to_string(),
        details: Some(details.to_string()),
    }
}

pub fn fixture_logs() -> Vec<ActivityLog> {
    vec![
        entry(
            "1",
            "2024-10-26 14:30:25",
            ("Nguyen Van A", "staff-1", "Staff"),
            "Approved booking",
            ActivityCategory::Booking,
            Severity::Success,
            ("192.168.1.10", "Chrome 119.0"),
            "Booking code: BK045",
        ),
        entry(
            "2",
            "2024-10-26 14:15:12",
            ("Admin", "admin-1", "Admin"),
            "Added new staff member",
            ActivityCategory::User,
            Severity::Info,
            ("192.168.1.5", "Chrome 119.0"),
            "Email: tranthib@hotelparadise.com",
        ),
        entry(
            "3",
            "2024-10-26 13:45:33",
            ("Le Van C", "staff-3", "Staff"),
            "Updated room price",
            ActivityCategory::Room,
            Severity::Warning,
            ("192.168.1.12", "Firefox 118.0"),
            "Deluxe Suite: 2200000 -> 2400000",
        ),
        entry(
            "4",
            "2024-10-26 13:30:45",
            ("System", "system", "System"),
            "Automatic data backup",
            ActivityCategory::System,
            Severity::Success,
            ("127.0.0.1", "System"),
            "Size: 2.4 GB",
        ),
        entry(
            "5",
            "2024-10-26 12:20:18",
            ("Unknown", "unknown", "Guest"),
            "Failed sign-in",
            ActivityCategory::Security,
            Severity::Error,
            ("45.123.45.67", "Unknown"),
            "Wrong password 3 times in a row",
        ),
        entry(
            "6",
            "2024-10-26 11:50:22",
            ("Pham Thi D", "staff-4", "Staff"),
            "Confirmed payment",
            ActivityCategory::Payment,
            Severity::Success,
            ("192.168.1.15", "Safari 17.0"),
            "INV089: 3,200,000 VND",
        ),
        entry(
            "7",
            "2024-10-26 11:30:55",
            ("Admin", "admin-1", "Admin"),
            "Changed system settings",
            ActivityCategory::System,
            Severity::Warning,
            ("192.168.1.5", "Chrome 119.0"),
            "Check-in time: 14:00 -> 15:00",
        ),
        entry(
            "8",
            "2024-10-26 10:45:12",
            ("Hoang Van E", "staff-5", "Staff"),
            "Updated room status",
            ActivityCategory::Room,
            Severity::Info,
            ("192.168.1.18", "Chrome 119.0"),
            "Room 301: cleaning -> available",
        ),
        entry(
            "9",
            "2024-10-26 10:20:33",
            ("Admin", "admin-1", "Admin"),
            "Granted staff permission",
            ActivityCategory::User,
            Severity::Info,
            ("192.168.1.5", "Chrome 119.0"),
            "Granted 'booking.approve' to Nguyen Van A",
        ),
        entry(
            "10",
            "2024-10-26 09:15:44",
            ("System", "system", "System"),
            "Unusual activity detected",
            ActivityCategory::Security,
            Severity::Error,
            ("103.45.67.89", "Unknown"),
            "Many API requests in a short period",
        ),
    ]
}
