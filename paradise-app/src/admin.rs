use paradise_store::{ActivityStats, BackupRecord, StoreError};
use uuid::Uuid;

use crate::error::AppResult;
use crate::state::AppState;

pub fn activity_stats(state: &AppState) -> AppResult<ActivityStats> {
    state.require_admin()?;
    Ok(state.activity.stats())
}

/// "Backup now". The record is kept for later restores.
pub async fn backup_now(state: &mut AppState) -> AppResult<BackupRecord> {
    state.require_admin()?;
    let record = state.backup.backup_now(&mut state.activity).await?;
    state.backups.push(record.clone());
    Ok(record)
}

/// Restore a previous backup. `confirmed` is the answer to the overwrite prompt.
pub fn restore(state: &mut AppState, backup_id: Uuid, confirmed: bool) -> AppResult<usize> {
    state.require_admin()?;
    let record = state
        .backups
        .iter()
        .find(|record| record.id == backup_id)
        .ok_or(StoreError::BackupNotFound(backup_id))?;

    let restored = state.backup.restore(record, confirmed, &mut state.activity)?;
    Ok(restored)
}
