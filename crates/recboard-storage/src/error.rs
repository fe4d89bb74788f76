use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("recommendation not found: {id}")]
    NotFound { id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("Sheets API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("OAuth token refresh failed: {0}")]
    TokenRefresh(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("storage config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for StorageError {
    fn from(e: reqwest::Error) -> Self {
        StorageError::Transport(e.to_string())
    }
}
