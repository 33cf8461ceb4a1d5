//! Preference store implementations.
//!
//! `JsonFilePreferenceStore` keeps every key in one JSON object on disk and
//! rewrites the file atomically (tmp file + rename) on each `set`.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use quill_core::error::{QuillError, Result};
use quill_core::preference::PreferenceStore;

use crate::paths::{QuillPaths, ServiceType};

/// File-backed preference store.
///
/// The file is read once at construction and cached. A missing, empty or
/// malformed file starts an empty store.
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl JsonFilePreferenceStore {
    /// Opens the store at the default preferences path.
    pub fn new(paths: &QuillPaths) -> Result<Self> {
        let path = paths.get_path(ServiceType::Preferences)?;
        Ok(Self::open(path))
    }

    /// Opens the store at an explicit path.
    pub fn open(path: PathBuf) -> Self {
        let values = Self::read_file(&path);
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(path: &Path) -> BTreeMap<String, String> {
        if !path.exists() {
            return BTreeMap::new();
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read preferences {:?}: {}", path, e);
                return BTreeMap::new();
            }
        };
        if content.trim().is_empty() {
            return BTreeMap::new();
        }
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Malformed preferences file {:?}: {}", path, e);
            BTreeMap::new()
        })
    }

    fn write_file(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(values)?;
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| QuillError::internal("Preference lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| QuillError::internal("Preference lock poisoned"))?;

        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());
        self.write_file(&next)?;
        *values = next;
        Ok(())
    }
}

/// Non-durable store, for headless runs and tests.
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| QuillError::internal("Preference lock poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| QuillError::internal("Preference lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
