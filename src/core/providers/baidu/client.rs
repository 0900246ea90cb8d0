//! Baidu Client
//!
//! Sends base64 images to the `selfie_anime` endpoint and interprets the reply.

use super::auth::{AccessToken, BaiduAuth, Credentials};
use super::error::VendorError;
use crate::config::VendorConfig;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Idle connections are dropped after this long
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

/// Baidu AIP client
#[derive(Debug, Clone)]
pub struct BaiduClient {
    config: VendorConfig,
    http_client: reqwest::Client,
    auth: BaiduAuth,
}

impl BaiduClient {
    /// Create a client with its own connection pool
    pub fn new(config: VendorConfig) -> Result<Self, VendorError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS))
            .build()
            .map_err(VendorError::network)?;

        let auth = BaiduAuth::new(http_client.clone(), config.token_url.clone());

        Ok(Self {
            config,
            http_client,
            auth,
        })
    }

    /// Fetch a fresh access token
    ///
    /// Credentials are resolved on every call so that rotated environment
    /// values take effect without a restart.
    pub async fn access_token(&self) -> Result<AccessToken, VendorError> {
        let credentials = Credentials::resolve(&self.config)?;
        self.auth.fetch_access_token(&credentials).await
    }

    /// Restyle a base64-encoded image
    ///
    /// Returns the base64 payload of the stylized JPEG.
    pub async fn selfie_anime(
        &self,
        token: &AccessToken,
        image_base64: &str,
    ) -> Result<String, VendorError> {
        let url = Url::parse_with_params(
            &self.config.transform_url,
            &[("access_token", token.as_str())],
        )
        .map_err(|e| VendorError::InvalidEndpoint {
            url: self.config.transform_url.clone(),
            message: e.to_string(),
        })?;

        debug!(
            encoded_len = image_base64.len(),
            "Sending image to style transfer endpoint"
        );

        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, "application/json")
            .form(&[("image", image_base64)])
            .send()
            .await
            .map_err(VendorError::network)?;

        let status = response.status();
        let text = response.text().await.map_err(VendorError::network)?;

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            warn!(%status, "Style transfer endpoint returned non-JSON body: {}", e);
            VendorError::Rejected {
                code: None,
                message: format!("Invalid response from style transfer API: {}", e),
            }
        })?;

        Self::transform_response(body)
    }

    /// Interpret the JSON returned by the style transfer endpoint
    pub fn transform_response(body: Value) -> Result<String, VendorError> {
        debug!(
            log_id = body.get("log_id").and_then(serde_json::Value::as_u64),
            "API Response: {}",
            summarize_response(&body)
        );

        match body.get("image").and_then(Value::as_str) {
            Some(image) if !image.is_empty() => Ok(image.to_string()),
            _ => {
                let error = VendorError::rejected(&body);
                warn!("Style transfer rejected: {}", error);
                Err(error)
            }
        }
    }
}

/// Response body with the image payload elided, for logging
fn summarize_response(body: &Value) -> String {
    let mut summary = body.clone();
    if let Some(image) = summary.get_mut("image") {
        if let Some(len) = image.as_str().map(str::len) {
            *image = Value::String(format!("<{} base64 chars>", len));
        }
    }
    summary.to_string()
}
