use std::fmt;
use std::path::PathBuf;

/// Identifier of one asset in the fixed batch sequence
///
/// Resources are numbered starting at 1; the filename is derived from the
/// identifier by the configured naming template (`reaf-{id}.png` by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The default batch: resources 1 through 7, ascending.
pub fn default_ids() -> impl Iterator<Item = ResourceId> {
    (1..=7).map(ResourceId)
}

/// One named asset together with its resolved filesystem locations
///
/// Built by [`BatchConfig::resource`](crate::BatchConfig::resource); the
/// runner never derives paths anywhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: ResourceId,
    pub filename: String,
    pub live_path: PathBuf,
    pub backup_path: PathBuf,
}

impl Resource {
    /// Whether the live file currently exists on disk.
    pub fn exists(&self) -> bool {
        self.live_path.is_file()
    }

    /// Whether a backup copy already exists.
    ///
    /// The presence of the backup file is the only record kept; there is no
    /// separate manifest.
    pub fn is_backed_up(&self) -> bool {
        self.backup_path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ids_cover_one_through_seven() {
        let ids: Vec<u32> = default_ids().map(|id| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn resource_id_displays_as_plain_number() {
        assert_eq!(ResourceId(3).to_string(), "3");
    }
}
