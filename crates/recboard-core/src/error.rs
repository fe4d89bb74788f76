use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
