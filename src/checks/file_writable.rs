//! Path writability health check

use std::path::PathBuf;

use crate::check::{Check, Severity};

/// Checks that a directory accepts file writes
///
/// Writes and removes a small probe file rather than inspecting permission
/// bits, so mount options and ACLs are covered too.
pub struct FileWritableCheck {
    path: PathBuf,
}

impl FileWritableCheck {
    /// Creates a check for the given directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Check for FileWritableCheck {
    fn check(&self) -> anyhow::Result<(Severity, String)> {
        if !self.path.is_dir() {
            return Ok((
                Severity::Error,
                format!("{} is not an existing directory", self.path.display()),
            ));
        }

        let probe = self.path.join(".healthgate-write-probe");
        match std::fs::write(&probe, b"probe") {
            Ok(()) => {
                // Ignore removal failures, the write already proved the point
                let _ = std::fs::remove_file(&probe);
                Ok((
                    Severity::Ok,
                    format!("{} is writable", self.path.display()),
                ))
            }
            Err(e) => Ok((
                Severity::Error,
                format!("Couldn't write to {} ({e})", self.path.display()),
            )),
        }
    }
}
