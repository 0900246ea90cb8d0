//! Error handling

use thiserror::Error;

/// The one notification shown for any failed transform
pub const TRANSFORM_FAILED_NOTICE: &str = "图片转换失败，请重试";

/// Result type for the client
pub type Result<T> = std::result::Result<T, ClientError>;

/// Error
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The gateway answered with a non-success status
    #[error("Transform failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The gateway answered 2xx with an unexpected body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ClientError {
    /// User-facing notification; identical for every kind of failure
    pub fn notice(&self) -> &'static str {
        TRANSFORM_FAILED_NOTICE
    }
}
