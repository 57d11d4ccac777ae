//! Storage-backed state cell
//!
//! A `JsonCell` holds one typed value in memory and mirrors it to a single
//! JSON file. Every mutation is written to disk first and only committed to
//! memory once the write succeeded.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::WellspaceError;

use super::file_io::{read_json_or, write_json_atomic};

pub struct JsonCell<T> {
    path: PathBuf,
    default: fn() -> T,
    value: RwLock<T>,
}

impl<T> JsonCell<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Create a cell holding `default()` until `load` is called
    pub fn new(path: PathBuf, default: fn() -> T) -> Self {
        Self {
            path,
            default,
            value: RwLock::new(default()),
        }
    }

    /// Read the value from disk, falling back to the default if absent
    pub fn load(&self) -> Result<(), WellspaceError> {
        let loaded: T = read_json_or(&self.path, self.default)?;

        let mut value = self
            .value
            .write()
            .map_err(|e| WellspaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *value = loaded;

        tracing::debug!(path = %self.path.display(), "loaded state cell");
        Ok(())
    }

    /// Get a copy of the current value
    pub fn get(&self) -> Result<T, WellspaceError> {
        let value = self
            .value
            .read()
            .map_err(|e| WellspaceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(value.clone())
    }

    /// Persist `new_value`, then make it the in-memory value
    pub fn replace(&self, new_value: T) -> Result<(), WellspaceError> {
        let mut value = self
            .value
            .write()
            .map_err(|e| WellspaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        write_json_atomic(&self.path, &new_value)?;
        *value = new_value;

        tracing::debug!(path = %self.path.display(), "persisted state cell");
        Ok(())
    }

    /// Derive a new value from the current one and persist it
    ///
    /// Returns the committed value. On a failed write the cell is unchanged.
    pub fn update<F>(&self, f: F) -> Result<T, WellspaceError>
    where
        F: FnOnce(&T) -> T,
    {
        let mut value = self
            .value
            .write()
            .map_err(|e| WellspaceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let new_value = f(&*value);
        write_json_atomic(&self.path, &new_value)?;
        *value = new_value.clone();

        tracing::debug!(path = %self.path.display(), "persisted state cell");
        Ok(new_value)
    }
}
