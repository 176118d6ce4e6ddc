use serde::de::StdError;
use thiserror::Error;

/// Failures that leave a remote call without a usable response.
#[derive(Error, Debug)]
pub enum Error {
    #[error("MailChimp API key is not set")]
    MissingApiKey,

    #[error("API returned error status {status}: {body}")]
    UnexpectedStatus {
        status: u16,
        body: String,
    },

    #[error("Failed to serialize request payload: {0}")]
    Serialization(serde_json::Error),

    #[error("Failed to deserialize response payload: {0}")]
    Deserialization(Box<dyn StdError + Send + Sync>),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
