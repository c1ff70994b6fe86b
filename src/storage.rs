use std::fs;
use std::path::PathBuf;

use crate::account::Account;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where the account collection lives between runs.
///
/// The whole collection goes in and out at once; there is no incremental
/// write path.
pub trait Storage {
    /// `Ok(None)` when nothing has been stored yet
    fn load(&self) -> Result<Option<Vec<Account>>, StorageError>;
    fn save(&self, accounts: &[Account]) -> Result<(), StorageError>;
}

/// Single JSON file holding an array of account records
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Account>>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let accounts = serde_json::from_str(&data)?;
        Ok(Some(accounts))
    }

    fn save(&self, accounts: &[Account]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(accounts)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
