//! Identifier Allocator
//!
//! Issues unique, strictly increasing identifiers backed by a counter file
//! holding the decimal text of the last issued id.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{EmployeeError, Result};

use super::atomic_file;

/// Hands out identifiers, persisting the high-water mark on every call
///
/// ## Concurrency:
/// - `last_id`: held for the whole read → persist → advance sequence,
///   so concurrent callers never observe the same value
/// - The in-memory value only advances once the counter file was replaced,
///   so an issued id is always reproducible after restart
/// - No cross-process exclusion: one active process per counter file
pub struct IdAllocator {
    /// Counter file path
    path: PathBuf,

    /// Last identifier durably recorded
    last_id: Mutex<u64>,
}

impl IdAllocator {
    /// Open the allocator, loading the last persisted value
    ///
    /// A missing counter file starts at zero, and so does an unparsable one
    /// (logged). Any other read failure is an error: restarting from zero
    /// would reissue identifiers already in use.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(EmployeeError::io("Error creating employee data directory"))?;
        }

        let last_id = Self::load_last_id(path)?;
        tracing::info!(path = %path.display(), last_id, "id allocator opened");

        Ok(Self {
            path: path.to_path_buf(),
            last_id: Mutex::new(last_id),
        })
    }

    /// Allocate the next identifier
    ///
    /// Steps:
    /// 1. Lock the counter
    /// 2. Persist `last + 1` to the counter file
    /// 3. Advance the in-memory counter and return the new value
    pub fn next_id(&self) -> Result<u64> {
        let mut last_id = self.last_id.lock();

        let next = last_id
            .checked_add(1)
            .ok_or(EmployeeError::SequenceExhausted)?;

        atomic_file::replace(&self.path, next.to_string().as_bytes())
            .map_err(EmployeeError::io("Error saving employee id sequence"))?;

        *last_id = next;
        tracing::debug!(id = next, "allocated employee id");
        Ok(next)
    }

    /// Last identifier issued (0 when none)
    pub fn last_id(&self) -> u64 {
        *self.last_id.lock()
    }

    /// Counter file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn load_last_id(path: &Path) -> Result<u64> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                tracing::warn!(path = %path.display(), error = %e, "counter file is not text, starting from 0");
                return Ok(0);
            }
            Err(e) => return Err(EmployeeError::io("Error reading employee id sequence")(e)),
        };

        match contents.trim().parse::<u64>() {
            Ok(id) => Ok(id),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    contents = contents.trim(),
                    error = %e,
                    "counter file unparsable, starting from 0"
                );
                Ok(0)
            }
        }
    }
}
