//! HTTP server implementation
//!
//! Serves the upload page, the transform endpoint and a health check.

pub mod middleware;
pub mod routes;

pub mod builder;
mod handlers;
pub mod server;
pub mod state;


pub use server::{HttpServer, create_app};
pub use state::AppState;
