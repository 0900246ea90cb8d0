//! Image transform pipeline
//!
//! `Received → Validated → Authenticated → Transformed → Responded`, with any
//! stage able to fail the request. Nothing is retried.

mod service;
mod types;
mod validation;

pub use service::TransformService;
pub use types::{ImageUpload, StyledImage, TransformStage};
pub use validation::{encode_image, validate_upload};
