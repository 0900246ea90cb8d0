//! Helper functions for creating specific error types

use super::types::GatewayError;

/// Message used when a failure carries nothing worth showing to the user
pub(crate) const FALLBACK_MESSAGE: &str = "图片处理失败";

impl GatewayError {
    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        Self::MissingInput(message.into())
    }

    pub fn payload_too_large<S: Into<String>>(message: S) -> Self {
        Self::PayloadTooLarge(message.into())
    }

    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Message placed in the `error` field of the HTTP response
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::MissingInput(msg)
            | Self::PayloadTooLarge(msg)
            | Self::Auth(msg)
            | Self::Upstream(msg)
            | Self::Network(msg)
            | Self::Internal(msg) => msg.as_str(),
            Self::Config(_) | Self::Io(_) => FALLBACK_MESSAGE,
        };

        if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message.to_string()
        }
    }

    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingInput(_) | Self::PayloadTooLarge(_))
    }
}
