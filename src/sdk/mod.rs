//! Rust client for the transform endpoint
//!
//! Mirrors what the upload page does: post one file, get a data URL back.

mod client;
mod errors;

pub use client::{TRANSFORM_PATH, TransformClient};
pub use errors::{ClientError, Result, TRANSFORM_FAILED_NOTICE};
