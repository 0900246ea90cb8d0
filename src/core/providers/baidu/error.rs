//! Baidu Error Handling

use crate::utils::error::GatewayError;
use serde_json::Value;
use thiserror::Error;

/// Fields that may carry a human-readable message, most specific first
const ERROR_MESSAGE_FIELDS: &[&str] = &["error_msg", "error_description"];

/// Errors raised while talking to Baidu AIP
#[derive(Error, Debug)]
pub enum VendorError {
    /// Client id or secret is not configured
    #[error("Baidu credentials are not configured: {0} is not set")]
    MissingCredentials(&'static str),

    /// The token endpoint answered without an access token
    #[error("获取access token失败: {body}")]
    TokenRejected { body: String },

    /// The transform endpoint answered without an image
    #[error("{message}")]
    Rejected {
        code: Option<i64>,
        message: String,
    },

    /// Configured endpoint is not a usable URL
    #[error("Invalid endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    /// Transport-level failure
    #[error("{0}")]
    Network(String),
}

impl VendorError {
    pub fn network(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            format!("Request to {} timed out", super::PROVIDER_NAME)
        } else {
            error.to_string()
        };
        Self::Network(message)
    }

    /// Build the transform failure for a parsed vendor body
    pub fn rejected(body: &Value) -> Self {
        Self::Rejected {
            code: body.get("error_code").and_then(Value::as_i64),
            message: extract_error_message(body),
        }
    }
}

impl From<VendorError> for GatewayError {
    fn from(error: VendorError) -> Self {
        match error {
            VendorError::MissingCredentials(_) | VendorError::TokenRejected { .. } => {
                GatewayError::Auth(error.to_string())
            }
            VendorError::Rejected { message, .. } => GatewayError::Upstream(message),
            VendorError::InvalidEndpoint { .. } => GatewayError::Config(error.to_string()),
            VendorError::Network(message) => GatewayError::Network(message),
        }
    }
}

/// Most specific error message in a vendor response
///
/// Falls back to the serialized body when no message field is present.
pub fn extract_error_message(body: &Value) -> String {
    ERROR_MESSAGE_FIELDS
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}
