//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::transform::TransformService;
use crate::ui::render_index;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup, so workers share it without locks.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration
    pub config: Arc<Config>,
    /// Transform pipeline, including the pooled vendor HTTP client
    pub transform: Arc<TransformService>,
    /// Upload page rendered once from the configured limits
    pub index_page: Arc<str>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let transform = TransformService::from_config(&config)?;
        let index_page: Arc<str> = render_index(config.upload()).into();

        Ok(Self {
            config: Arc::new(config),
            transform: Arc::new(transform),
            index_page,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Largest image the transform endpoint accepts, in bytes
    pub fn max_image_bytes(&self) -> usize {
        self.config.upload().max_image_bytes
    }
}
