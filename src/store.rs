//! JSON file-backed persistence for board collections.
//!
//! Each named collection is stored as one JSON array in its own file under
//! the data directory. The store fails soft in both directions: a missing,
//! unreadable, or malformed file loads as the caller's fallback, and a
//! failed write is logged and swallowed so the in-memory state stays
//! authoritative for the rest of the session.
//!
//! There is no transactionality, no partial-write protection, and no schema
//! version field. Two processes sharing a data directory can silently
//! overwrite each other's snapshots.

use crate::error::{ChemboardError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default data directory name.
const DEFAULT_DATA_DIR: &str = "chemboard_data";

/// File-backed store for named record collections.
pub struct StateStore {
    /// Base directory for storage
    base_dir: PathBuf,
}

impl StateStore {
    /// Creates a store rooted at `CHEMBOARD_DATA_DIR`, or the default directory.
    pub fn new() -> Result<Self> {
        let data_dir =
            std::env::var("CHEMBOARD_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::with_data_dir(data_dir)
    }

    /// Creates a store rooted at a custom data directory.
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = data_dir.as_ref().to_path_buf();
        if !base_dir.exists() {
            fs::create_dir_all(&base_dir).map_err(|e| {
                ChemboardError::storage(format!("Failed to create data directory: {}", e))
            })?;
            info!("Created data directory: {:?}", base_dir);
        }
        Ok(Self { base_dir })
    }

    /// Gets the file path backing a storage key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    /// Loads the collection saved under `key`, or `fallback` when nothing
    /// usable was saved.
    ///
    /// Never surfaces an error: unreadable or malformed payloads are logged
    /// at warn level and replaced with the fallback.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: Vec<T>) -> Vec<T> {
        match self.try_load(key) {
            Ok(Some(records)) => records,
            Ok(None) => fallback,
            Err(e) => {
                warn!("Failed to load state for {}: {}", key, e);
                fallback
            }
        }
    }

    /// Fallible load. `Ok(None)` means no usable snapshot exists (absent
    /// file, or a payload that is not a JSON array).
    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path)
            .map_err(|e| ChemboardError::storage(format!("Failed to read {:?}: {}", path, e)))?;
        let value: serde_json::Value = serde_json::from_str(&raw).map_err(|e| {
            ChemboardError::serialization(format!("Invalid JSON in {:?}: {}", path, e))
        })?;

        // Shape mismatch is treated as absent data, not an error.
        if !value.is_array() {
            debug!("Payload for {} is not an array, using fallback", key);
            return Ok(None);
        }

        let records: Vec<T> = serde_json::from_value(value).map_err(|e| {
            ChemboardError::serialization(format!("Unexpected record shape in {:?}: {}", path, e))
        })?;
        Ok(Some(records))
    }

    /// Saves the collection under `key`, logging and swallowing any failure.
    pub fn save<T: Serialize>(&self, key: &str, records: &[T]) {
        if let Err(e) = self.try_save(key, records) {
            warn!("Failed to save state for {}: {}", key, e);
        }
    }

    /// Fallible save for callers that want to observe storage errors.
    pub fn try_save<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let path = self.key_path(key);
        let raw = serde_json::to_string_pretty(records)
            .map_err(|e| ChemboardError::serialization(format!("Failed to serialize: {}", e)))?;
        fs::write(&path, raw)
            .map_err(|e| ChemboardError::storage(format!("Failed to write {:?}: {}", path, e)))?;

        debug!(key, records = records.len(), "saved collection snapshot");
        Ok(())
    }
}
