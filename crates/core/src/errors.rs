//! Core error types for the Mad Wallet client.
//!
//! This module defines transport-agnostic error types. HTTP-specific errors
//! (from reqwest, status codes, etc.) are converted to these types by the
//! api-client layer.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client core.
///
/// This enum represents all possible errors that can occur in the client.
/// Transport-specific errors are wrapped in string form to keep this type
/// transport-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Backend operation failed: {0}")]
    Backend(#[from] BackendError),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Transport-agnostic error type for backend operations.
///
/// This enum uses `String` for all error details, allowing the api-client
/// layer to convert transport-specific errors (reqwest, serde, etc.) into
/// this format.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request could not be sent or the connection failed.
    #[error("Network request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The bearer token was missing, expired, or rejected.
    #[error("Unauthorized")]
    Unauthorized,

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Deserialization(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Backend(BackendError::Deserialization(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
