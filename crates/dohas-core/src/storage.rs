// Rust guideline compliant 2026-02-06

//! Durable key-value storage backed by a directory of JSON files.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go through a temp file and an
//! atomic rename while holding an exclusive lock, so readers never observe a
//! partially written dataset.

use crate::{Challenge, Error, Language, Result};
use std::path::{Path, PathBuf};

/// Directory-backed key-value store.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding one file per key.
    dir: PathBuf,
}

impl FileStore {
    /// Creates a new FileStore rooted at `dir`.
    ///
    /// The directory is created lazily on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { dir })
    }

    /// Returns the storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path that backs `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or could escape the directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::Storage(format!("invalid storage key '{key}'")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl FileStore {
    /// Reads the raw value stored under `key`.
    ///
    /// # Returns
    ///
    /// `None` if nothing has been stored under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or the file cannot be read.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key is invalid
    /// - The directory cannot be created
    /// - The lock cannot be acquired
    /// - The atomic write fails
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        self.with_lock(|| {
            let temp_path = path.with_extension("json.tmp");
            {
                let mut file = File::create(&temp_path)?;
                file.write_all(value.as_bytes())?;
                file.sync_all()?;
            }
            std::fs::rename(&temp_path, &path)?;
            Ok(())
        })
    }

    /// Executes a closure with an exclusive lock on the storage directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock is held elsewhere or the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.dir.join(".lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}

impl FileStore {
    /// Loads the stored dataset for a language.
    ///
    /// # Returns
    ///
    /// `None` if no dataset has been stored for the language.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds invalid JSON.
    pub fn load_challenges(&self, language: Language) -> Result<Option<Vec<Challenge>>> {
        self.get(&language.storage_key())?
            .map(|raw| serde_json::from_str(&raw).map_err(Error::from))
            .transpose()
    }

    /// Stores the dataset for a language.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_challenges(&self, language: Language, challenges: &[Challenge]) -> Result<()> {
        let json = serde_json::to_string(challenges)?;
        self.set(&language.storage_key(), &json)
    }
}
