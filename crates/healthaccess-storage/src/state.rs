use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects;

/// Load a JSON state file.
pub async fn load_state<T: DeserializeOwned>(path: &Path) -> Result<T, StorageError> {
    let body = objects::read_file(path).await?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Load a JSON state file, or `T::default()` if it does not exist yet.
pub async fn load_state_or_default<T: DeserializeOwned + Default>(
    path: &Path,
) -> Result<T, StorageError> {
    match load_state(path).await {
        Err(StorageError::NotFound { .. }) => Ok(T::default()),
        other => other,
    }
}

/// Save a JSON state file atomically via `tmp_path`.
pub async fn save_state<T: Serialize>(
    path: &Path,
    tmp_path: &Path,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::write_file_atomic(path, tmp_path, body).await
}
