pub mod app_config;
pub mod activity_log;
pub mod backup;

pub use activity_log::{ActivityCategory, ActivityLog, ActivityLogStore, ActivityStats, Severity};
pub use backup::{BackupRecord, BackupService};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Backup snapshot is unreadable: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Backup not found: {0}")]
    BackupNotFound(uuid::Uuid),

    #[error("Restore was not confirmed; current data would be overwritten")]
    RestoreNotConfirmed,
}

pub type StoreResult<T> = Result<T, StoreError>;
