use std::io::ErrorKind;
use std::path::Path;

use crate::error::StorageError;

/// Read a whole file.
pub async fn read_file(path: &Path) -> Result<Vec<u8>, StorageError> {
    tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            StorageError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StorageError::Read(format!("{}: {e}", path.display()))
        }
    })
}

/// Write a file by writing `tmp_path` first and renaming it over `path`,
/// so readers never see a half-written file. Creates the parent directory.
pub async fn write_file_atomic(
    path: &Path,
    tmp_path: &Path,
    body: Vec<u8>,
) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::Write(format!("{}: {e}", parent.display())))?;
    }

    tokio::fs::write(tmp_path, body)
        .await
        .map_err(|e| StorageError::Write(format!("{}: {e}", tmp_path.display())))?;

    // Owner read/write only.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(tmp_path, std::fs::Permissions::from_mode(0o600))
            .await
            .map_err(|e| StorageError::Write(format!("{}: {e}", tmp_path.display())))?;
    }

    tokio::fs::rename(tmp_path, path)
        .await
        .map_err(|e| StorageError::Write(format!("{}: {e}", path.display())))
}

/// Delete a file. Returns `false` if it did not exist.
pub async fn delete_file(path: &Path) -> Result<bool, StorageError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(StorageError::Delete(format!("{}: {e}", path.display()))),
    }
}
