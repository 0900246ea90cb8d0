//! Vendor (Baidu AIP) configuration

use super::*;
use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable holding the Baidu client id
pub const API_KEY_ENV: &str = "BAIDU_API_KEY";
/// Environment variable holding the Baidu client secret
pub const SECRET_KEY_ENV: &str = "BAIDU_SECRET_KEY";

/// Baidu AIP configuration
///
/// Credentials are normally left out of the file and read from the process
/// environment each time a token is requested.
#[derive(Clone, Serialize, Deserialize)]
pub struct VendorConfig {
    /// Client id; falls back to `BAIDU_API_KEY`
    pub api_key: Option<String>,
    /// Client secret; falls back to `BAIDU_SECRET_KEY`
    #[serde(skip_serializing)]
    pub secret_key: Option<String>,
    /// OAuth token endpoint
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Style transfer endpoint
    #[serde(default = "default_transform_url")]
    pub transform_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_vendor_timeout")]
    pub timeout: u64,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            secret_key: None,
            token_url: default_token_url(),
            transform_url: default_transform_url(),
            timeout: default_vendor_timeout(),
        }
    }
}

impl std::fmt::Debug for VendorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VendorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("token_url", &self.token_url)
            .field("transform_url", &self.transform_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl VendorConfig {
    /// Get client id with environment variable fallback
    pub fn get_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
    }

    /// Get client secret with environment variable fallback
    pub fn get_secret_key(&self) -> Option<String> {
        self.secret_key
            .clone()
            .or_else(|| std::env::var(SECRET_KEY_ENV).ok())
            .filter(|key| !key.is_empty())
    }

    /// Request timeout as a duration
    pub fn timeout_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout)
    }

    /// Validate vendor configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("token_url", &self.token_url),
            ("transform_url", &self.transform_url),
        ] {
            let url = Url::parse(value)
                .map_err(|e| format!("{} has invalid URL format: {}", name, e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(format!(
                    "{} must use http:// or https:// scheme, got: {}",
                    name,
                    url.scheme()
                ));
            }
        }

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
