use std::path::PathBuf;

use thiserror::Error;

/// Error type for backup operations
///
/// Backups are one-shot copies of a live asset into the backup directory.
/// Every variant carries the path(s) involved so the runner can report a
/// failure against the resource it belongs to.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The backup directory could not be created
    #[error("failed to create backup directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Copying the live file into the backup directory failed
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading or carrying over file metadata (modification time) failed
    #[error("failed to preserve metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for background removal
///
/// Returned by [`RemoveBackground`](crate::RemoveBackground) implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemovalError {
    /// The input image has zero width or height
    #[error("image has zero width or height")]
    EmptyImage,

    /// A removal parameter is invalid or outside the acceptable range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Error type for the per-resource transform step
///
/// Covers the whole decode, remove-background, encode, atomic-replace
/// pipeline. All variants are soft at the batch level: the runner reports
/// them and moves on to the next resource.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The live file could not be decoded as an image
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The background removal capability rejected or failed on the image
    #[error("background removal failed: {0}")]
    Removal(#[from] RemovalError),

    /// Encoding the transformed image failed
    #[error("failed to encode result: {0}")]
    Encode(#[source] image::ImageError),

    /// Writing the temporary file or renaming it over the live file failed
    #[error("failed to replace original: {0}")]
    Io(#[from] std::io::Error),
}

impl From<tempfile::PersistError> for TransformError {
    fn from(err: tempfile::PersistError) -> Self {
        Self::Io(err.error)
    }
}
