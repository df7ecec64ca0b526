use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid datasets-get-entry payload: {0}")]
    Get(#[source] serde_json::Error),

    #[error("invalid datasets-set-entry payload: {0}")]
    Set(#[source] serde_json::Error),
}
