//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{GatewayError, Result};
use tracing::{info, warn};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::config("Configuration is required"))?;

        config.validate()?;
        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the config file, falling back to defaults, then apply environment overrides
pub async fn load_config() -> Result<Config> {
    let config_path = Config::config_path();
    info!("Loading configuration file: {}", config_path);

    let config = match Config::from_file(&config_path).await {
        Ok(config) => {
            info!("Configuration file loaded successfully");
            config
        }
        Err(e) => {
            info!("Configuration file not used, falling back to defaults: {}", e);
            Config::default()
        }
    };

    let config = config.with_env_overrides()?;
    config.validate()?;
    Ok(config)
}

/// Run the server with automatic configuration loading
pub async fn run_server() -> Result<()> {
    info!("Starting ghibli-gateway");

    let config = load_config().await?;

    if config.vendor().get_api_key().is_none() || config.vendor().get_secret_key().is_none() {
        warn!("Baidu credentials are not set; every transform will fail until BAIDU_API_KEY and BAIDU_SECRET_KEY are provided");
    }

    let server = ServerBuilder::new().with_config(config.clone()).build()?;
    info!("Server starting at: http://{}", config.server().address());
    info!("   GET  /               - Upload page");
    info!("   GET  /health         - Health check");
    info!("   POST /api/transform  - Stylize an image");

    server.start().await
}
