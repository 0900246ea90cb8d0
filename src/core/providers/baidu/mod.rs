//! Baidu AIP provider
//!
//! Client-credentials token exchange and the `selfie_anime` style transfer call.

mod auth;
mod client;
mod error;

pub use auth::{AccessToken, BaiduAuth, Credentials};
pub use client::BaiduClient;
pub use error::{VendorError, extract_error_message};

pub(crate) const PROVIDER_NAME: &str = "baidu";
