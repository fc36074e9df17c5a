//! Record Store
//!
//! Owns the collection file: a JSON array holding every employee record.

use std::fs::{self, File};
use std::io::{self, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{EmployeeError, Result};
use crate::model::Employee;

use super::atomic_file;

/// Whole-file employee store
///
/// ## Cost model:
/// - Every read re-reads and parses the whole collection file (no cache)
/// - Every `append` rewrites the whole collection file: O(n) in records
///
/// ## Concurrency:
/// - `write_lock`: serializes `append` (read-modify-write) so no update is
///   lost between two writers in the same process
/// - Reads take no lock; writes go through an atomic rename so readers
///   never observe a partially written file
pub struct RecordStore {
    /// Collection file path
    path: PathBuf,

    /// Serializes write operations
    write_lock: Mutex<()>,
}

impl RecordStore {
    /// Open a store backed by `path`
    ///
    /// Creates the parent directory; the collection file itself is created
    /// by the first `append`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(EmployeeError::io("Error creating employee data directory"))?;
        }

        tracing::info!(path = %path.display(), "record store opened");

        Ok(Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
        })
    }

    /// Read every record in file order
    ///
    /// A missing collection file is an empty store, not an error.
    pub fn load_all(&self) -> Result<Vec<Employee>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(EmployeeError::io("Error reading employee data")(e)),
        };

        serde_json::from_reader(BufReader::new(file))
            .map_err(EmployeeError::serialization("Error reading employee data"))
    }

    /// Append a record and rewrite the collection file
    ///
    /// Steps:
    /// 1. Acquire write lock
    /// 2. Load the current collection
    /// 3. Push the new record
    /// 4. Atomically replace the collection file
    pub fn append(&self, record: Employee) -> Result<()> {
        let _write_guard = self.write_lock.lock();

        let mut records = self.load_all()?;
        let id = record.id;
        records.push(record);

        atomic_file::replace_with(&self.path, |writer| {
            serde_json::to_writer(writer, &records).map_err(io::Error::from)
        })
        .map_err(EmployeeError::io("Error saving employee data"))?;

        tracing::debug!(id, total = records.len(), "appended employee record");
        Ok(())
    }

    /// First record (in file order) matching `predicate`
    pub fn find_first<P>(&self, mut predicate: P) -> Result<Option<Employee>>
    where
        P: FnMut(&Employee) -> bool,
    {
        Ok(self.load_all()?.into_iter().find(|e| predicate(e)))
    }

    /// All records matching `predicate`, in file order
    pub fn find_all<P>(&self, mut predicate: P) -> Result<Vec<Employee>>
    where
        P: FnMut(&Employee) -> bool,
    {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|e| predicate(e))
            .collect())
    }

    /// Collection file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
