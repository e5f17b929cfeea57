//! Per-case status records.
//!
//! One plain-text file per case number holding exactly the trimmed
//! last-seen headline status. Writes go through a sibling temp file and
//! a rename so a crash mid-write cannot truncate the record.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CasewatchError;

/// Outcome of comparing a freshly fetched status against the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    pub changed: bool,
    pub previous: Option<String>,
}

pub struct ChangeTracker {
    state_dir: PathBuf,
}

impl ChangeTracker {
    pub fn new(state_dir: PathBuf) -> Self {
        Self { state_dir }
    }

    /// Records live alongside the executable, falling back to the
    /// current directory when the executable path is unavailable.
    pub fn default_state_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn record_path(&self, case_number: &str) -> PathBuf {
        self.state_dir.join(format!("LAST_STATUS_{case_number}.txt"))
    }

    /// Compare `new_status` (trimmed) against the stored record and
    /// bring the record up to date.
    ///
    /// First run for a case creates the record and reports no change;
    /// a matching record is left untouched byte-for-byte.
    pub fn check_and_update(
        &self,
        case_number: &str,
        new_status: &str,
    ) -> Result<StatusChange, CasewatchError> {
        let status = new_status.trim();
        let path = self.record_path(case_number);

        if !path.exists() {
            self.write_record(&path, status)?;
            return Ok(StatusChange {
                changed: false,
                previous: None,
            });
        }

        let previous = fs::read_to_string(&path)
            .map_err(|source| CasewatchError::RecordIo {
                path: path.clone(),
                source,
            })?
            .trim()
            .to_string();

        if status != previous {
            self.write_record(&path, status)?;
            Ok(StatusChange {
                changed: true,
                previous: Some(previous),
            })
        } else {
            Ok(StatusChange {
                changed: false,
                previous: Some(previous),
            })
        }
    }

    fn write_record(&self, path: &Path, status: &str) -> Result<(), CasewatchError> {
        let io_err = |source| CasewatchError::RecordIo {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        // Temp file in the same directory, then an atomic rename.
        let tmp = path.with_extension("txt.tmp");
        fs::write(&tmp, status).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)?;
        Ok(())
    }
}
