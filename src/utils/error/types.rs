//! Error types for the Gateway

use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
///
/// The first five variants are the outcomes a transform request can fail with.
/// Their payload is the human-readable message returned to the caller.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The multipart body carried no `image` field
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The uploaded image is larger than the configured limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// The vendor credential exchange failed
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The vendor rejected or failed the transform
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The vendor could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}
