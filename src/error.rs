//! Error types for the PPL language server

use thiserror::Error;

/// Result type for server operations
pub type Result<T> = std::result::Result<T, ServerError>;

/// Transport-level errors for the stdio message loop.
///
/// A keyword without documentation is not an error anywhere in this crate;
/// lookup absence travels as `Option::None`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("Message is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
