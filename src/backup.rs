use std::fs;

use crate::config::BatchConfig;
use crate::error::BackupError;
use crate::resource::Resource;

/// Result of attempting a one-time backup for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupOutcome {
    /// A fresh copy was written to the backup directory.
    Created,
    /// A backup already existed; nothing was touched.
    AlreadyBackedUp,
}

/// Creates the backup directory if it does not exist yet.
///
/// Directory creation is recursive and idempotent; calling this when the
/// directory already exists is a no-op.
pub fn ensure_backup_dir(config: &BatchConfig) -> Result<(), BackupError> {
    let path = config.backup_dir();
    fs::create_dir_all(&path).map_err(|source| BackupError::CreateDir { path, source })
}

/// Backs up a resource at most once.
///
/// If a file already exists at the backup path it is taken as the record
/// that the resource was backed up on an earlier run, and its bytes are
/// left untouched. Otherwise the live file's bytes and permissions are
/// copied and the source modification time is carried over.
///
/// The caller is expected to have checked that the live file exists.
pub fn backup_once(resource: &Resource) -> Result<BackupOutcome, BackupError> {
    if resource.is_backed_up() {
        return Ok(BackupOutcome::AlreadyBackedUp);
    }

    fs::copy(&resource.live_path, &resource.backup_path).map_err(|source| BackupError::Copy {
        from: resource.live_path.clone(),
        to: resource.backup_path.clone(),
        source,
    })?;

    preserve_mtime(resource)?;
    Ok(BackupOutcome::Created)
}

fn preserve_mtime(resource: &Resource) -> Result<(), BackupError> {
    let metadata =
        fs::metadata(&resource.live_path).map_err(|source| BackupError::Metadata {
            path: resource.live_path.clone(),
            source,
        })?;
    // Not every filesystem reports modification times; skip quietly if so.
    let Ok(modified) = metadata.modified() else {
        return Ok(());
    };
    let backup = fs::File::options()
        .write(true)
        .open(&resource.backup_path)
        .map_err(|source| BackupError::Metadata {
            path: resource.backup_path.clone(),
            source,
        })?;
    backup
        .set_modified(modified)
        .map_err(|source| BackupError::Metadata {
            path: resource.backup_path.clone(),
            source,
        })
}
