//! Batch backup-and-background-removal for fixed sets of PNG assets.
//!
//! For each resource in a small, enumerable set of named files
//! (`reaf-1.png` through `reaf-7.png` by default), the runner ensures a
//! one-time backup copy exists under `original_leaves/`, then removes the
//! image's background and overwrites the live file in place via an atomic
//! rename. Missing files and per-file failures are reported and skipped;
//! one bad resource never aborts the batch.
//!
//! The removal algorithm itself sits behind the [`RemoveBackground`] trait.
//! [`BorderKeyRemover`] is the shipped implementation; tests and callers
//! with their own matting pipeline can plug in anything else.
//!
//! ```no_run
//! use unbackground::{default_ids, BatchConfig, BatchRunner, BorderKeyRemover};
//!
//! let config = BatchConfig::new("src/assets");
//! let runner = BatchRunner::new(config, BorderKeyRemover::default());
//! runner.run(default_ids());
//! ```

mod backup;
mod config;
mod error;
mod removal;
mod resource;
mod runner;
#[cfg(test)]
mod test_utils;

pub use backup::{backup_once, ensure_backup_dir, BackupOutcome};
pub use config::{BatchConfig, DEFAULT_BACKUP_DIR, DEFAULT_FILE_STEM};
pub use error::{BackupError, RemovalError, TransformError};
pub use removal::{BorderKeyRemover, RemoveBackground};
pub use resource::{default_ids, Resource, ResourceId};
pub use runner::{BatchRunner, ResourceStatus};
