//! Error types for Verdant.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
