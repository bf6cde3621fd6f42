//! Error types for site-storage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content not found for section '{0}'")]
    NotFound(String),

    #[error("Could not determine a data directory for the database")]
    NoDataDir,
}
