//! Transport error type and its conversion into the core error.

use madwallet_core::errors::{BackendError, Error as CoreError};
use thiserror::Error;

/// Errors raised by the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The bearer token was missing, expired, or rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Deserialization(String),

    /// The configuration could not produce a working client.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

/// The core only sees its own transport-agnostic error type; reqwest and
/// status-code details are flattened here at the crate boundary.
impl From<ApiError> for CoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(e) => CoreError::Backend(BackendError::Network(e.to_string())),
            ApiError::Status { status, message } => {
                CoreError::Backend(BackendError::Status { status, message })
            }
            ApiError::Unauthorized => CoreError::Backend(BackendError::Unauthorized),
            ApiError::Deserialization(message) => {
                CoreError::Backend(BackendError::Deserialization(message))
            }
            ApiError::Configuration(message) => CoreError::Unexpected(message),
        }
    }
}
