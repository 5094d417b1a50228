// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client-side locale preference storage
//!
//! The browser keeps the preference in local storage. Here that is a
//! `PreferenceStore`: in memory for tests and single sessions, or a JSON
//! file written atomically for desktop and CLI clients.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use super::LOCALE_STORAGE_KEY;

/// Persisted locale preference
pub trait PreferenceStore: Send + Sync {
    /// Stored locale code, if any
    fn load(&self) -> Result<Option<String>, PreferenceError>;

    /// Persists `code` as the preference
    fn save(&self, code: &str) -> Result<(), PreferenceError>;
}

/// In-memory preference store
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a preference
    pub fn with_preference(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        Ok(self.value.lock().clone())
    }

    fn save(&self, code: &str) -> Result<(), PreferenceError> {
        *self.value.lock() = Some(code.to_string());
        Ok(())
    }
}

/// Preference store backed by `preferences.json`
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store in `storage_path`, creating the directory if needed
    pub fn new(storage_path: &Path) -> Result<Self, PreferenceError> {
        fs::create_dir_all(storage_path)?;
        Ok(Self {
            path: storage_path.join("preferences.json"),
        })
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(LOCALE_STORAGE_KEY))
    }

    fn save(&self, code: &str) -> Result<(), PreferenceError> {
        let mut all = self.read_all()?;
        all.insert(LOCALE_STORAGE_KEY.to_string(), code.to_string());
        let data = serde_json::to_string_pretty(&all)?;
        atomic_write(&self.path, data.as_bytes())
    }
}

/// Atomic file write (write to temp, then rename)
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), PreferenceError> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Errors from the preference store
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Stored file is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
