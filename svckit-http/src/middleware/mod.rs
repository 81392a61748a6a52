//! HTTP middleware
//!
//! Reusable actix-web middleware shared by the backend services.

pub mod basic_auth;
pub mod request_logging;

// Re-export middleware components
pub use basic_auth::{BasicAuth, BasicCredentials};
pub use request_logging::RequestLogging;
