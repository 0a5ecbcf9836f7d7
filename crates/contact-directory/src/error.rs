//! Error types for contact-directory operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Cannot read directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid directory JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid directory shape: {0}")]
    InvalidShape(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
