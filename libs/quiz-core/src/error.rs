//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while interpreting quiz text or stored history.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown answer token: {0}")]
    UnknownAnswer(String),

    #[error("invalid question index: {0}")]
    InvalidIndex(String),
}
