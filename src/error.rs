use thiserror::Error;

use crate::config::ClientConfigBuilderError;

#[derive(Debug, Error)]
pub enum TochkaError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The server rejected the bearer token (HTTP 403).
    #[error("JWT token was rejected by the server")]
    InvalidJwtToken,

    /// Transport failures and non-success statuses other than 403, as reported by reqwest.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to deserialize response: {0}")]
    Deserialize(#[from] serde_path_to_error::Error<serde_json::Error>),

    #[error("Invalid client configuration: {0}")]
    Config(#[from] ClientConfigBuilderError),
}

impl TochkaError {
    /// HTTP status carried by the error, if the server produced one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            TochkaError::InvalidJwtToken => Some(reqwest::StatusCode::FORBIDDEN),
            TochkaError::Http(e) => e.status(),
            _ => None,
        }
    }
}
