//! Error handling for the quiz tools

use std::path::PathBuf;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed history file {}: {source}", .path.display())]
    History {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for application operations
pub type Result<T> = std::result::Result<T, AppError>;
