//! Core functionality for the Gateway
//!
//! This module contains the vendor client and the transform pipeline built on it.

pub mod providers;
pub mod transform;
