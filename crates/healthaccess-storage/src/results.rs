use std::path::{Path, PathBuf};

use healthaccess_core::models::record::SavedAssessment;
use healthaccess_core::storage_keys;

use crate::error::StorageError;
use crate::{objects, state};

/// The results log: every saved assessment, oldest first, in one JSON file.
///
/// The log is capped. After each append only the `max_entries` most recent
/// assessments (by completion time) are kept.
#[derive(Debug, Clone)]
pub struct ResultsLog {
    path: PathBuf,
    tmp_path: PathBuf,
    max_entries: usize,
}

impl ResultsLog {
    pub const DEFAULT_MAX_ENTRIES: usize = 10;

    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            path: dir.join(storage_keys::RESULTS_LOG),
            tmp_path: dir.join(storage_keys::results_log_tmp()),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Change the cap. A cap of 0 is treated as 1 so the latest result
    /// always survives its own append.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// All saved assessments in file order (oldest first). A missing log
    /// file reads as empty.
    pub async fn load(&self) -> Result<Vec<SavedAssessment>, StorageError> {
        state::load_state_or_default(&self.path).await
    }

    async fn save(&self, records: &[SavedAssessment]) -> Result<(), StorageError> {
        state::save_state(&self.path, &self.tmp_path, &records).await
    }

    /// All saved assessments, most recent first.
    pub async fn list(&self) -> Result<Vec<SavedAssessment>, StorageError> {
        let mut records = self.load().await?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    pub async fn get(&self, id: i64) -> Result<SavedAssessment, StorageError> {
        self.load()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or(StorageError::RecordNotFound { id })
    }

    /// The most recent saved assessment for one questionnaire.
    pub async fn latest_for(
        &self,
        questionnaire_id: &str,
    ) -> Result<Option<SavedAssessment>, StorageError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|r| r.questionnaire_id == questionnaire_id))
    }

    /// Append a record and enforce the cap. Returns how many old records
    /// were dropped.
    pub async fn append(&self, record: SavedAssessment) -> Result<usize, StorageError> {
        let mut records = self.load().await?;
        let id = record.id;
        records.push(record);
        let dropped = cap(&mut records, self.max_entries);
        self.save(&records).await?;

        tracing::info!(id, total = records.len(), "assessment saved");
        if dropped > 0 {
            tracing::info!(dropped, max = self.max_entries, "cleaned up old assessment data");
        }
        Ok(dropped)
    }

    /// Enforce the cap without appending. Returns how many records were dropped.
    pub async fn prune(&self) -> Result<usize, StorageError> {
        let mut records = self.load().await?;
        let dropped = cap(&mut records, self.max_entries);
        if dropped > 0 {
            self.save(&records).await?;
            tracing::info!(dropped, max = self.max_entries, "cleaned up old assessment data");
        }
        Ok(dropped)
    }

    /// Delete the log. Returns `false` if there was nothing to delete.
    pub async fn clear(&self) -> Result<bool, StorageError> {
        let deleted = objects::delete_file(&self.path).await?;
        if deleted {
            tracing::info!(path = %self.path.display(), "results log cleared");
        }
        Ok(deleted)
    }

    /// Write a pretty-printed JSON backup of the log to `dest`. Returns the
    /// number of records written.
    pub async fn export(&self, dest: &Path) -> Result<usize, StorageError> {
        let records = self.list().await?;
        let body = serde_json::to_vec_pretty(&records)?;
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Write(format!("{}: {e}", parent.display())))?;
        }
        tokio::fs::write(dest, body)
            .await
            .map_err(|e| StorageError::Write(format!("{}: {e}", dest.display())))?;

        tracing::info!(path = %dest.display(), count = records.len(), "results exported");
        Ok(records.len())
    }
}

/// Most recent first. Ties keep their file order reversed, so the later
/// append wins.
fn sort_newest_first(records: &mut [SavedAssessment]) {
    records.reverse();
    records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
}

/// Keep the `max` most recent records, preserving oldest-first file order.
fn cap(records: &mut Vec<SavedAssessment>, max: usize) -> usize {
    if records.len() <= max {
        return 0;
    }
    let dropped = records.len() - max;
    sort_newest_first(records);
    records.truncate(max);
    records.reverse();
    dropped
}
