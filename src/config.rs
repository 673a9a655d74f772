use std::path::PathBuf;

use crate::resource::{Resource, ResourceId};

/// Default name of the backup subdirectory under the assets directory.
pub const DEFAULT_BACKUP_DIR: &str = "original_leaves";

/// Default filename stem of the managed assets (`reaf-1.png` .. `reaf-7.png`).
pub const DEFAULT_FILE_STEM: &str = "reaf";

/// Injected configuration for one batch run
///
/// The assets directory is always supplied by the caller; only the naming
/// pieces carry defaults. All path derivation for the batch goes through
/// this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory holding the live asset files.
    pub assets_dir: PathBuf,
    /// Name of the backup subdirectory created under `assets_dir`.
    pub backup_dir_name: String,
    /// Filename stem; resources are named `{stem}-{id}.{extension}`.
    pub file_stem: String,
    /// Filename extension, without the leading dot.
    pub extension: String,
}

impl BatchConfig {
    /// Creates a configuration with the default naming template.
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            backup_dir_name: DEFAULT_BACKUP_DIR.to_owned(),
            file_stem: DEFAULT_FILE_STEM.to_owned(),
            extension: "png".to_owned(),
        }
    }

    /// The directory holding untouched pre-transform copies.
    pub fn backup_dir(&self) -> PathBuf {
        self.assets_dir.join(&self.backup_dir_name)
    }

    /// Renders the filename for a resource identifier.
    pub fn filename(&self, id: ResourceId) -> String {
        format!("{}-{}.{}", self.file_stem, id, self.extension)
    }

    /// Resolves a resource identifier to its live and backup locations.
    pub fn resource(&self, id: ResourceId) -> Resource {
        let filename = self.filename(id);
        Resource {
            id,
            live_path: self.assets_dir.join(&filename),
            backup_path: self.backup_dir().join(&filename),
            filename,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn filename_follows_naming_template() {
        let config = BatchConfig::new("/tmp/assets");
        assert_eq!(config.filename(ResourceId(1)), "reaf-1.png");
        assert_eq!(config.filename(ResourceId(7)), "reaf-7.png");
    }

    #[test]
    fn resource_paths_land_in_assets_and_backup_dirs() {
        let config = BatchConfig::new("/tmp/assets");
        let resource = config.resource(ResourceId(3));
        assert_eq!(resource.live_path, Path::new("/tmp/assets/reaf-3.png"));
        assert_eq!(
            resource.backup_path,
            Path::new("/tmp/assets/original_leaves/reaf-3.png")
        );
        assert_eq!(resource.filename, "reaf-3.png");
    }

    #[test]
    fn naming_pieces_are_overridable() {
        let mut config = BatchConfig::new("assets");
        config.file_stem = "leaf".to_owned();
        config.backup_dir_name = "backups".to_owned();
        assert_eq!(config.filename(ResourceId(2)), "leaf-2.png");
        assert_eq!(config.backup_dir(), Path::new("assets/backups"));
    }
}
