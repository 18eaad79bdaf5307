//! Persistence of the journal state.
//!
//! This module contains the storage port (a key-value capability with
//! `read`/`write`), its filesystem and in-memory implementations, and the
//! `PersistenceGateway` which turns the `Journal` into a single JSON blob and
//! back.
//!
//! Loading never fails: an absent slot, an unreadable slot and a malformed blob
//! all produce empty collections, with the failure logged.

use crate::constants::{STORAGE_FILE_EXTENSION, STORAGE_KEY, STORAGE_LOCK_EXTENSION};
use crate::errors::{AppResult, StorageError};
use crate::journal_core::Journal;
use fs2::FileExt;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// A durable key-value store holding string values.
///
/// Writes overwrite any prior value under the same key.
pub trait StoragePort {
    /// Reads the value stored under `key`, or `None` if the slot is empty.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    /// Stores `value` under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as a JSON file inside a data directory.
///
/// Writes go to a temporary file in the same directory and are renamed over
/// the slot, so a reader never observes a partial blob. Concurrent writers are
/// excluded with an advisory lock on a sibling `.lock` file.
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Creates a store rooted at `data_dir`; the directory is created on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the file backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", key, STORAGE_FILE_EXTENSION))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.{}", key, STORAGE_LOCK_EXTENSION))
    }
}

impl StoragePort for FileStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key);
        let write_err = |source: io::Error| StorageError::Write {
            path: path.clone(),
            source,
        };

        ensure_data_dir(&self.data_dir).map_err(write_err)?;

        let lock_path = self.lock_path(key);
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(write_err)?;
        lock_file
            .try_lock_exclusive()
            .map_err(|_| StorageError::Busy {
                path: lock_path.clone(),
            })?;

        let mut temp = tempfile::NamedTempFile::new_in(&self.data_dir).map_err(write_err)?;
        temp.write_all(value.as_bytes()).map_err(write_err)?;
        temp.as_file().sync_all().map_err(write_err)?;
        temp.persist(&path).map_err(|e| write_err(e.error))?;

        let _ = FileExt::unlock(&lock_file);
        debug!("Wrote storage slot {:?}", path);
        Ok(())
    }
}

fn ensure_data_dir(data_dir: &Path) -> io::Result<()> {
    if data_dir.exists() {
        return Ok(());
    }

    fs::create_dir_all(data_dir)?;

    #[cfg(unix)]
    {
        use crate::constants::DEFAULT_DIR_PERMISSIONS;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(data_dir, fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))?;
    }

    info!("Created data directory {:?}", data_dir);
    Ok(())
}

/// Keeps values in process memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose `key` slot already holds `value`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Returns a copy of the raw value under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serializes the journal into the durable slot and restores it at startup.
pub struct PersistenceGateway<S: StoragePort> {
    storage: S,
    key: String,
}

impl<S: StoragePort> PersistenceGateway<S> {
    /// Creates a gateway using the default slot key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    /// Creates a gateway that reads and writes the slot named `key`.
    ///
    /// ```
    /// use diarium::journal_core::Journal;
    /// use diarium::journal_io::{MemoryStorage, PersistenceGateway};
    ///
    /// let gateway = PersistenceGateway::with_key(MemoryStorage::new(), "scratch");
    /// gateway.save(&Journal::default()).unwrap();
    /// assert!(gateway.storage().raw("scratch").is_some());
    /// assert!(gateway.storage().raw("diaryPracticeData").is_none());
    /// ```
    pub fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    /// The underlying storage port.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the journal from the slot.
    ///
    /// Returns an empty journal if the slot is absent, cannot be read, or holds
    /// a blob that does not parse. Failures are logged, never returned.
    pub fn load(&self) -> Journal {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Storage slot '{}' is empty", self.key);
                return Journal::default();
            }
            Err(e) => {
                error!("Failed to read storage slot '{}': {}", self.key, e);
                return Journal::default();
            }
        };

        match serde_json::from_str::<Journal>(&raw) {
            Ok(journal) => {
                debug!("Loaded {} records from '{}'", journal.len(), self.key);
                journal
            }
            Err(e) => {
                error!("Failed to parse storage slot '{}': {}", self.key, e);
                Journal::default()
            }
        }
    }

    /// Writes the whole journal to the slot, replacing the previous blob.
    pub fn save(&self, journal: &Journal) -> AppResult<()> {
        let blob = serde_json::to_string(journal).map_err(StorageError::from)?;
        self.storage.write(&self.key, &blob)?;
        debug!("Saved {} records to '{}'", journal.len(), self.key);
        Ok(())
    }
}
