//! Error handling utilities
//!
//! This module provides the gateway error type and its HTTP mapping.

mod helpers;
mod response;
mod types;


// Re-export commonly used types
pub use response::ErrorResponse;
pub use types::{GatewayError, Result};
