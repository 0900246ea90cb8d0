//! Common test utilities for ghibli-gateway

pub mod fixtures;
pub mod vendor;

pub use fixtures::{jpeg_bytes, multipart_body, png_bytes};
pub use vendor::MockVendor;
