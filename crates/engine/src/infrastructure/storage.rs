//! Device-local key/value storage.
//!
//! `FileKeyValueStore` keeps every pair in one JSON file, by default at:
//! - Linux: ~/.config/brewsheet/state.json
//! - macOS: ~/Library/Application Support/io.brewsheet.brewsheet/state.json
//! - Windows: C:\Users\<User>\AppData\Roaming\brewsheet\brewsheet\config\state.json

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use dashmap::DashMap;
use directories::ProjectDirs;

use super::ports::KeyValueStore;

/// Storage that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: DashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn save(&self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).map(|entry| entry.value().clone())
    }

    fn remove(&self, key: &str) {
        self.values.remove(key);
    }
}

/// File-backed storage with an in-memory cache.
///
/// The whole file is rewritten on every change.
#[derive(Debug)]
pub struct FileKeyValueStore {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: RwLock<HashMap<String, String>>,
}

impl FileKeyValueStore {
    /// Platform config directory, or the working directory if there is none.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("io", "brewsheet", "brewsheet") {
            dirs.config_dir().join("state.json")
        } else {
            PathBuf::from("brewsheet_state.json")
        }
    }

    /// Open the store at `path`, loading existing data if the file exists.
    ///
    /// An unreadable or corrupt file starts the store empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let storage_path = path.into();
        let cache = read_storage_file(&storage_path);

        tracing::debug!(path = ?storage_path, entries = cache.len(), "File storage initialized");

        Self {
            storage_path,
            cache: RwLock::new(cache),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist the cache to disk
    fn persist(&self, cache: &HashMap<String, String>) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!(error = %e, "Failed to create storage directory");
                return;
            }
        }

        match serde_json::to_string_pretty(cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!(error = %e, "Failed to write storage file");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize storage data");
            }
        }
    }
}

fn read_storage_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse storage file");
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read storage file");
            HashMap::new()
        }
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                self.persist(&guard);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to acquire write lock for storage");
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to acquire read lock for storage");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                if guard.remove(key).is_some() {
                    self.persist(&guard);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to acquire write lock for storage");
            }
        }
    }
}
