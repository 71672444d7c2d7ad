//! Preference persistence: one key, the last-applied language code.
//!
//! Storage is strictly best-effort. The controller treats a read failure as
//! "no stored preference" and a write failure as a warning; neither ever
//! interrupts language application.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single storage key holding the preferred language code.
pub const LANGUAGE_KEY: &str = "preferredLanguage";

/// Storage failure. Callers are expected to degrade gracefully.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A key-value store for the language preference.
///
/// `read` returns `Ok(None)` when no preference has been stored; errors mean
/// the store is unavailable or its contents are unreadable.
pub trait PreferenceStore {
    /// Read the stored language code, if any.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Store the language code, replacing any previous value.
    fn write(&self, code: &str) -> Result<(), StorageError>;
}

/// On-disk shape of the preference file: `{"preferredLanguage": "tr"}`.
#[derive(Debug, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(rename = "preferredLanguage")]
    preferred_language: Option<String>,
}

/// File-backed preference store.
///
/// Persists a small JSON object (`{"preferredLanguage": "tr"}`) at the
/// configured path. A missing file reads as no preference; parent
/// directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let file: PreferenceFile = serde_json::from_str(&contents)?;
        Ok(file.preferred_language)
    }

    fn write(&self, code: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = PreferenceFile {
            preferred_language: Some(code.to_string()),
        };
        let contents = serde_json::to_string(&file)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

/// In-memory preference store for tests, with switches to force failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: RefCell<Option<String>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose reads and writes both fail, like storage being disabled.
    pub fn unavailable() -> Self {
        Self {
            value: RefCell::new(None),
            fail_reads: true,
            fail_writes: true,
        }
    }

    /// A store pre-seeded with a language code.
    pub fn with_value(code: &str) -> Self {
        Self {
            value: RefCell::new(Some(code.to_string())),
            ..Self::default()
        }
    }

    /// The currently stored value, for assertions.
    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "storage disabled",
            )));
        }
        Ok(self.value.borrow().clone())
    }

    fn write(&self, code: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "storage disabled",
            )));
        }
        *self.value.borrow_mut() = Some(code.to_string());
        Ok(())
    }
}
