use chrono::{DateTime, Utc};
use paradise_core::SimulatedLatency;
use paradise_shared::DomainEvent;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::activity_log::{ActivityLog, ActivityLogStore};
use crate::{StoreError, StoreResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// JSON copy of the activity trail at backup time
    pub snapshot: String,
    pub bytes: usize,
}

/// Admin "Backup now" / "Restore" actions. Snapshots stay in memory.
pub struct BackupService {
    latency: SimulatedLatency,
}

impl BackupService {
    pub fn new(latency: SimulatedLatency) -> Self {
        Self { latency }
    }

    pub async fn backup_now(&self, store: &mut ActivityLogStore) -> StoreResult<BackupRecord> {
        let snapshot = serde_json::to_string(store.logs())?;
        tracing::info!("Backup started ({} entries)", store.len());
        self.latency.wait().await;

        let record = BackupRecord {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bytes: snapshot.len(),
            snapshot,
        };

        let event = DomainEvent::BackupCompleted {
            backup_id: record.id,
            bytes: record.bytes,
        };
        store.record_system(&event, record.created_at.naive_utc());

        tracing::info!(backup_id = %record.id, bytes = record.bytes, "Backup completed");
        Ok(record)
    }

    /// Overwrites the current trail with the snapshot. Returns the number of restored entries.
    pub fn restore(
        &self,
        record: &BackupRecord,
        confirmed: bool,
        store: &mut ActivityLogStore,
    ) -> StoreResult<usize> {
        if !confirmed {
            tracing::warn!(backup_id = %record.id, "Restore cancelled");
            return Err(StoreError::RestoreNotConfirmed);
        }

        let logs: Vec<ActivityLog> = serde_json::from_str(&record.snapshot)?;
        let restored = logs.len();
        store.replace(logs);
        store.record_system(&DomainEvent::DataRestored { backup_id: record.id }, Utc::now().naive_utc());

        tracing::warn!(backup_id = %record.id, "Restored {} activity entries", restored);
        Ok(restored)
    }
}

impl Default for BackupService {
    fn default() -> Self {
        Self::new(SimulatedLatency::from_millis(2000))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_backup_waits_and_records() {
        let service = BackupService::default();
        let mut store = ActivityLogStore::with_fixture();

        let start = tokio::time::Instant::now();
        let record = service.backup_now(&mut store).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(record.bytes, record.snapshot.len());
        assert_eq!(store.len(), 11);
        assert_eq!(store.logs()[0].action, "Data backup");
        assert_eq!(store.logs()[0].user_id, "system");
    }

    #[tokio::test]
    async fn test_restore_requires_confirmation() {
        let service = BackupService::new(SimulatedLatency::none());
        let mut store = ActivityLogStore::with_fixture();
        let record = service.backup_now(&mut store).await.unwrap();

        let result = service.restore(&record, false, &mut store);
        assert!(matches!(result, Err(StoreError::RestoreNotConfirmed)));
        assert_eq!(store.len(), 11);
    }

    #[tokio::test]
    async fn test_restore_replaces_trail() {
        let service = BackupService::new(SimulatedLatency::none());
        let mut store = ActivityLogStore::with_fixture();
        let record = service.backup_now(&mut store).await.unwrap();

        store.replace(Vec::new());
        let restored = service.restore(&record, true, &mut store).unwrap();

        // Snapshot was taken before the backup entry itself was written
        assert_eq!(restored, 10);
        assert_eq!(store.len(), 11);
        assert_eq!(store.logs()[0].id, "11");
        assert_eq!(store.logs()[0].action, "Data restored");
    }

    #[test]
    fn test_restore_rejects_corrupt_snapshot() {
        let service = BackupService::default();
        let mut store = ActivityLogStore::with_fixture();
        let record = BackupRecord {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            snapshot: "not json".to_string(),
            bytes: 8,
        };

        let result = service.restore(&record, true, &mut store);
        assert!(matches!(result, Err(StoreError::Snapshot(_))));
        assert_eq!(store.len(), 10);
    }
}
