//! PIN repository
//!
//! Stores the Argon2 hash of the user's PIN in pin.json. The PIN itself is
//! never written to disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::WellspaceError;

use super::cell::JsonCell;

/// The persisted PIN record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPin {
    /// PHC-format Argon2id hash
    pub hash: String,
}

pub struct PinRepository {
    cell: JsonCell<Option<StoredPin>>,
}

impl PinRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            cell: JsonCell::new(path, || None),
        }
    }

    pub fn load(&self) -> Result<(), WellspaceError> {
        self.cell.load()
    }

    pub fn get(&self) -> Result<Option<StoredPin>, WellspaceError> {
        self.cell.get()
    }

    pub fn is_set(&self) -> Result<bool, WellspaceError> {
        Ok(self.cell.get()?.is_some())
    }

    /// Persist a new PIN hash, replacing any previous one
    pub fn set_hash(&self, hash: String) -> Result<(), WellspaceError> {
        self.cell.replace(Some(StoredPin { hash }))
    }
}
