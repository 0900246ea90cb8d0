//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and the actix application factory.

use crate::config::{Config, CorsConfig, ServerConfig};
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpServer as ActixHttpServer,
    dev::Server,
    middleware::{Condition, DefaultHeaders, Logger},
    web,
};
use std::net::TcpListener;
use std::time::Duration;
use tracing::info;

/// Value of the `Server` header on every response
pub const SERVER_HEADER: &str = "ghibli-gateway";

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::new(config.clone())?;

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Start the HTTP server and wait for it to stop
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let listener = TcpListener::bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, self.config.port))?;

        let server = self.listen(listener)?;
        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Serve on an already bound listener
    ///
    /// The returned server must be awaited or spawned to make progress.
    pub fn listen(self, listener: TcpListener) -> Result<Server> {
        let workers = self.config.worker_count();
        let header_timeout = Duration::from_secs(self.config.timeout);
        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .workers(workers)
            .client_request_timeout(header_timeout)
            .listen(listener)?
            .run();

        Ok(server)
    }

    fn format_bind_error(error: std::io::Error, addr: &str, port: u16) -> GatewayError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => GatewayError::config(format!(
                "Failed to bind {}: port {} is already in use. Set GHIBLI_PORT or server.port to another port",
                addr, port
            )),
            std::io::ErrorKind::PermissionDenied => GatewayError::config(format!(
                "Failed to bind {}: permission denied for port {}",
                addr, port
            )),
            _ => GatewayError::config(format!("Failed to bind {}: {}", addr, error)),
        }
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the Actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors_config = state.config.server().cors.clone();

    App::new()
        .app_data(state)
        .wrap(Condition::new(cors_config.enabled, build_cors(&cors_config)))
        .wrap(Logger::default())
        .wrap(DefaultHeaders::new().add(("Server", SERVER_HEADER)))
        .wrap(RequestIdMiddleware)
        .configure(routes::configure_routes)
}

fn build_cors(cors_config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(["GET", "POST"])
        .allow_any_header()
        .expose_headers(["x-request-id"])
        .max_age(cors_config.max_age as usize);

    if cors_config.allows_all_origins() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
