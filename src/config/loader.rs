//! Configuration loading utilities
//!
//! Environment variables override values read from the config file.

use super::Config;
use crate::utils::error::{GatewayError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Config file read when `GHIBLI_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.yaml";
/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "GHIBLI_CONFIG";

impl Config {
    /// Path of the config file to load
    pub fn config_path() -> String {
        env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("GHIBLI_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("GHIBLI_PORT") {
            self.server.port = parse_var("GHIBLI_PORT", &port)?;
        }
        if let Some(workers) = lookup("GHIBLI_WORKERS") {
            self.server.workers = Some(parse_var("GHIBLI_WORKERS", &workers)?);
        }
        if let Some(max_bytes) = lookup("GHIBLI_MAX_IMAGE_BYTES") {
            self.upload.max_image_bytes = parse_var("GHIBLI_MAX_IMAGE_BYTES", &max_bytes)?;
        }

        if let Some(token_url) = lookup("BAIDU_TOKEN_URL") {
            self.vendor.token_url = token_url;
        }
        if let Some(transform_url) = lookup("BAIDU_TRANSFORM_URL") {
            self.vendor.transform_url = transform_url;
        }
        if let Some(timeout) = lookup("BAIDU_TIMEOUT") {
            self.vendor.timeout = parse_var("BAIDU_TIMEOUT", &timeout)?;
        }

        debug!("Environment overrides applied");
        Ok(self)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", name, e)))
}
