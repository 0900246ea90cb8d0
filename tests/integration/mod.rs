//! Integration tests

mod client_tests;
mod config_tests;
