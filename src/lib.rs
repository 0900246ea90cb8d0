//! # ghibli-gateway
//!
//! Upload a photo, restyle it through the Baidu AIP `selfie_anime` API, and
//! show the original and the result side by side.
//!
//! ## Features
//!
//! - **Upload page**: drag-and-drop or file picker, local preview, loading state
//! - **Transform endpoint**: `POST /api/transform` proxies one image to the vendor
//! - **Fresh credentials**: a new access token is fetched for every request
//! - **Rust client**: [`sdk::TransformClient`] talks to a running gateway
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use ghibli_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/gateway.yaml").await?;
//!     let gateway = Gateway::new(config)?;
//!     gateway.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Client
//!
//! ```rust,no_run
//! use ghibli_gateway::core::transform::ImageUpload;
//! use ghibli_gateway::sdk::TransformClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TransformClient::new("http://localhost:3000")?;
//!     let photo = ImageUpload::new(std::fs::read("photo.jpg")?).with_filename("photo.jpg");
//!     let styled = client.transform(&photo).await?;
//!     println!("{}", styled.url);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod sdk;
pub mod server;
pub mod ui;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::transform::{ImageUpload, StyledImage, TransformService};
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// The gateway process: configuration plus the HTTP server built from it
pub struct Gateway {
    config: Config,
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");

        let server = server::builder::ServerBuilder::new()
            .with_config(config.clone())
            .build()?;

        Ok(Self { config, server })
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        info!("Starting ghibli-gateway {}", build_info());
        info!("Configuration: {:#?}", self.config);

        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Gateway build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: "unknown",
            git_hash: "unknown",
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{} ({}, built {})", self.version, self.git_hash, self.build_time)
    }
}

/// Build metadata captured by the build script
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
    }
}
