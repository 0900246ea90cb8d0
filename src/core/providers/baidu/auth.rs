//! Baidu AIP Authentication
//!
//! OAuth2 client-credentials exchange. Every call asks the token endpoint for a
//! fresh token; nothing is cached between requests.

use super::error::VendorError;
use crate::config::{API_KEY_ENV, SECRET_KEY_ENV, VendorConfig};
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Client id and secret used for the token exchange
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Resolve credentials from config, falling back to the process environment
    pub fn resolve(config: &VendorConfig) -> Result<Self, VendorError> {
        let client_id = config
            .get_api_key()
            .ok_or(VendorError::MissingCredentials(API_KEY_ENV))?;
        let client_secret = config
            .get_secret_key()
            .ok_or(VendorError::MissingCredentials(SECRET_KEY_ENV))?;
        Ok(Self::new(client_id, client_secret))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

/// Bearer token issued by the token endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Baidu AIP authentication handler
#[derive(Debug, Clone)]
pub struct BaiduAuth {
    http_client: reqwest::Client,
    token_url: String,
}

impl BaiduAuth {
    pub fn new(http_client: reqwest::Client, token_url: impl Into<String>) -> Self {
        Self {
            http_client,
            token_url: token_url.into(),
        }
    }

    /// Exchange client credentials for an access token
    pub async fn fetch_access_token(
        &self,
        credentials: &Credentials,
    ) -> Result<AccessToken, VendorError> {
        let url = Url::parse_with_params(
            &self.token_url,
            &[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
            ],
        )
        .map_err(|e| VendorError::InvalidEndpoint {
            url: self.token_url.clone(),
            message: e.to_string(),
        })?;

        debug!(client_id = %credentials.client_id, "Requesting Baidu access token");

        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(VendorError::network)?;

        let status = response.status();
        let text = response.text().await.map_err(VendorError::network)?;

        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                warn!(%status, "Token endpoint returned non-JSON body: {}", e);
                return Err(VendorError::TokenRejected { body: text });
            }
        };

        match body.get("access_token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => {
                debug!(
                    expires_in = body.get("expires_in").and_then(serde_json::Value::as_u64),
                    "Access token issued"
                );
                Ok(AccessToken::new(token))
            }
            _ => {
                warn!(%status, "Token endpoint response has no access_token");
                Err(VendorError::TokenRejected {
                    body: body.to_string(),
                })
            }
        }
    }
}
