use uuid::Uuid;

/// Something a dashboard action did, recorded into the activity log
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    UserSignedIn {
        user_id: String,
        email: String,
    },
    UserRegistered {
        user_id: String,
        email: String,
    },
    BookingSubmitted {
        booking_id: Uuid,
        code: String,
        room_id: String,
        total: i64,
    },
    BookingApproved {
        code: String,
    },
    BookingRejected {
        code: String,
        reason: String,
    },
    RoomStatusChanged {
        room_number: String,
        from: String,
        to: String,
    },
    BackupCompleted {
        backup_id: Uuid,
        bytes: usize,
    },
    DataRestored {
        backup_id: Uuid,
    },
}

impl DomainEvent {
    /// Short human-readable description of the action
    pub fn action(&self) -> &'static str {
        match self {
            DomainEvent::UserSignedIn { .. } => "Signed in",
            DomainEvent::UserRegistered { .. } => "Registered account",
            DomainEvent::BookingSubmitted { .. } => "Submitted booking",
            DomainEvent::BookingApproved { .. } => "Approved booking",
            DomainEvent::BookingRejected { .. } => "Rejected booking",
            DomainEvent::RoomStatusChanged { .. } => "Updated room status",
            DomainEvent::BackupCompleted { .. } => "Data backup",
            DomainEvent::DataRestored { .. } => "Data restored",
        }
    }

    pub fn details(&self) -> String {
        match self {
            DomainEvent::UserSignedIn { email, .. } | DomainEvent::UserRegistered { email, .. } => {
                format!("Email: {}", email)
            }
            DomainEvent::BookingSubmitted { code, room_id, total, .. } => {
                format!("Booking code: {} (room {}, total {})", code, room_id, total)
            }
            DomainEvent::BookingApproved { code } => format!("Booking code: {}", code),
            DomainEvent::BookingRejected { code, reason } => {
                format!("Booking code: {} ({})", code, reason)
            }
            DomainEvent::RoomStatusChanged { room_number, from, to } => {
                format!("Room {}: {} -> {}", room_number, from, to)
            }
            DomainEvent::BackupCompleted { backup_id, bytes } => {
                format!("Backup {}: {} bytes", backup_id, bytes)
            }
            DomainEvent::DataRestored { backup_id } => format!("Backup {}", backup_id),
        }
    }
}
