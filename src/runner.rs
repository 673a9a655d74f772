use std::fs;
use std::path::Path;

use image::ImageFormat;
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

use crate::backup::{backup_once, ensure_backup_dir, BackupOutcome};
use crate::config::BatchConfig;
use crate::error::{BackupError, TransformError};
use crate::removal::RemoveBackground;
use crate::resource::{Resource, ResourceId};

/// Outcome of processing one resource.
#[derive(Debug)]
pub enum ResourceStatus {
    /// The live file does not exist; nothing was done.
    NotFound,
    /// Backup ensured and the live file overwritten with the transform result.
    Transformed {
        /// Whether this run created the backup or one already existed.
        backup: BackupOutcome,
    },
    /// The backup copy failed; the live file was left untouched.
    BackupFailed(BackupError),
    /// Decode, removal, encode or replace failed after the backup was
    /// ensured; the live file still holds its pre-run bytes.
    TransformFailed {
        backup: BackupOutcome,
        error: TransformError,
    },
}

/// Batch backup-and-transform runner
///
/// Walks a sequence of resource identifiers strictly in order: for each one,
/// ensures a one-time backup exists, then decodes the live file, hands it to
/// the background removal capability and atomically replaces the live file
/// with the result. A failure on one resource never aborts the batch.
///
/// The transform is re-applied on every run; no "already processed" marker
/// is kept.
#[derive(Debug)]
pub struct BatchRunner<R> {
    config: BatchConfig,
    remover: R,
}

impl<R: RemoveBackground> BatchRunner<R> {
    pub fn new(config: BatchConfig, remover: R) -> Self {
        Self { config, remover }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Runs the batch over the given identifiers.
    ///
    /// All signaling happens through per-event log lines; there is no
    /// aggregate result. If the backup directory cannot be created the
    /// whole batch is abandoned, since no resource could be safely
    /// transformed without it.
    pub fn run(&self, ids: impl IntoIterator<Item = ResourceId>) {
        if let Err(err) = ensure_backup_dir(&self.config) {
            error!("{err}");
            return;
        }
        for id in ids {
            let filename = self.config.filename(id);
            match self.process(id) {
                ResourceStatus::NotFound => info!("File not found: {filename}"),
                ResourceStatus::Transformed { .. } => info!("Done {filename}"),
                ResourceStatus::BackupFailed(err) => warn!("Failed {filename}: {err}"),
                ResourceStatus::TransformFailed { error, .. } => {
                    warn!("Failed {filename}: {error}");
                }
            }
        }
    }

    /// Processes a single resource: backup once, then transform in place.
    ///
    /// The backup directory must already exist. A resource whose backup
    /// copy fails is not transformed; a backup is the precondition for
    /// mutating the live file.
    pub fn process(&self, id: ResourceId) -> ResourceStatus {
        let resource = self.config.resource(id);
        if !resource.exists() {
            return ResourceStatus::NotFound;
        }

        let backup = match backup_once(&resource) {
            Ok(outcome) => {
                if outcome == BackupOutcome::Created {
                    info!("Backed up {}", resource.filename);
                }
                outcome
            }
            Err(err) => return ResourceStatus::BackupFailed(err),
        };

        info!("Processing {}...", resource.filename);
        match self.transform(&resource) {
            Ok(()) => ResourceStatus::Transformed { backup },
            Err(error) => ResourceStatus::TransformFailed { backup, error },
        }
    }

    /// Decode, remove background, then atomically replace the live file.
    ///
    /// The result is encoded into a temporary file in the same directory and
    /// renamed over the live path, so an interrupted or failed transform can
    /// never leave a partially written asset behind. The temporary file is
    /// cleaned up on drop if anything fails before the rename. The rename
    /// swaps inodes, so the live file's permissions are copied onto the
    /// temporary file first; the replacement must look like an in-place
    /// overwrite.
    fn transform(&self, resource: &Resource) -> Result<(), TransformError> {
        let decoded = image::open(&resource.live_path).map_err(TransformError::Decode)?;
        let output = self.remover.remove_background(&decoded)?;
        let permissions = fs::metadata(&resource.live_path)?.permissions();

        let dir = resource.live_path.parent().unwrap_or(Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        output
            .write_to(tmp.as_file_mut(), ImageFormat::Png)
            .map_err(TransformError::Encode)?;
        tmp.as_file().set_permissions(permissions)?;
        tmp.persist(&resource.live_path)?;
        debug!("Replaced {}", resource.live_path.display());
        Ok(())
    }
}
