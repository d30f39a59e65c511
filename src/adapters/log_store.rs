//! File-backed log store.
//!
//! Implements [`LogStorePort`] as a single append-only text file named
//! [`LOG_FILE_NAME`] inside a directory.  On target the directory is the
//! FAT-formatted SD card mounted at [`SD_MOUNT_POINT`](crate::config::SD_MOUNT_POINT);
//! on host it is any directory (tests use a temp dir).  Plain `std::fs`
//! works on both since ESP-IDF exposes mounted volumes through its VFS.
//!
//! If the card could not be mounted at boot, the store is built with
//! [`FileLogStore::unavailable`] and every operation returns
//! [`StorageError::Unavailable`] without touching the filesystem.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::ports::LogStorePort;
use crate::config::LOG_FILE_NAME;
use crate::error::StorageError;

pub struct FileLogStore {
    path: Option<PathBuf>,
}

impl FileLogStore {
    /// Store the log at `<dir>/pawlog.txt`.  The file is created lazily on
    /// the first append.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self {
            path: Some(dir.as_ref().join(LOG_FILE_NAME)),
        }
    }

    /// Store for a card that failed to mount.
    pub fn unavailable() -> Self {
        Self { path: None }
    }

    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }

    fn require_path(&self) -> Result<&Path, StorageError> {
        self.path.as_deref().ok_or(StorageError::Unavailable)
    }
}

impl LogStorePort for FileLogStore {
    fn append_line(&mut self, line: &str) -> Result<(), StorageError> {
        let path = self.require_path()?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    fn read_all(&mut self) -> Result<Vec<u8>, StorageError> {
        let path = self.require_path()?;
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&mut self) -> Result<(), StorageError> {
        let path = self.require_path()?;
        fs::remove_file(path)?;
        Ok(())
    }
}
