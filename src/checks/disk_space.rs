//! Free disk space health check

use std::path::{Path, PathBuf};

use sysinfo::Disks;

use crate::check::{Check, Severity};

const GIB: u64 = 1_073_741_824;
const MIB: u64 = 1_048_576;

/// Checks that the disk holding a path has enough free space
pub struct DiskSpaceCheck {
    path: PathBuf,
    warn_below: u64,
    error_below: u64,
}

impl DiskSpaceCheck {
    /// Creates a check on the current directory's disk
    ///
    /// Defaults: warn below 1 GiB free, error below 100 MiB free.
    pub fn new() -> Self {
        Self::for_path(".")
    }

    /// Creates a check on the disk holding the given path
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            warn_below: GIB,
            error_below: 100 * MIB,
        }
    }

    /// Sets the thresholds, in bytes free
    pub fn with_thresholds(mut self, warn_below: u64, error_below: u64) -> Self {
        self.warn_below = warn_below;
        self.error_below = error_below;
        self
    }

    /// Finds the disk with the longest mount point that is a prefix of `path`
    fn available_space(&self, path: &Path) -> Option<(PathBuf, u64)> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .filter(|disk| path.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .map(|disk| (disk.mount_point().to_path_buf(), disk.available_space()))
    }
}

impl Default for DiskSpaceCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for DiskSpaceCheck {
    fn check(&self) -> anyhow::Result<(Severity, String)> {
        let path = std::fs::canonicalize(&self.path)?;

        let Some((mount, available)) = self.available_space(&path) else {
            return Ok((
                Severity::Error,
                format!("No disk found for {}", path.display()),
            ));
        };

        let free_gib = available as f64 / GIB as f64;
        let message = format!("{:.1} GiB free on {}", free_gib, mount.display());

        if available < self.error_below {
            Ok((Severity::Error, message))
        } else if available < self.warn_below {
            Ok((Severity::Warning, message))
        } else {
            Ok((Severity::Ok, message))
        }
    }
}
