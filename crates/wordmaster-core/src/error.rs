use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Guess submitted after the session was already won")]
    InvalidState,

    #[error("Stored scores are corrupt: {0}")]
    PersistenceCorrupt(String),

    #[error("Failed to write scores to storage: {0}")]
    PersistenceWriteFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
