use thiserror::Error;

/// Top-level error type for Lodge.
///
/// Only I/O-bound layers fail. Language resolution and field picking are
/// total and never produce one of these.
#[derive(Debug, Error)]
pub enum LodgeError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Row store error (unreadable or malformed content).
    #[error("store error: {0}")]
    Store(String),

    /// A requested row does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
