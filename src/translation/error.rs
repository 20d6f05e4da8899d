use thiserror::Error;

use super::detect::DetectionError;

/// Failure of a single translation attempt.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Detection(#[from] DetectionError),

    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: String },

    #[error("could not reach {endpoint}: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {message}")]
    Service {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("unexpected response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },
}
