use thiserror::Error;

use crate::account::AccountStoreError;

#[derive(Error, Debug)]
pub enum PassbookError {
    #[error("{0}")]
    Store(#[from] AccountStoreError),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Aborted: {0}")]
    Aborted(String),
}
