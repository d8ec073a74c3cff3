//! Error types for xor_merkle

use thiserror::Error;

/// Result type alias for xor_merkle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a tree
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Decode error: {0}")]
    Decode(#[from] hex::FromHexError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}
