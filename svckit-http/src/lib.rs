//! svckit-http
//!
//! actix-web helpers shared by the backend services: REST error
//! constructors, default handlers (health, no-route, method-not-allowed)
//! and middleware for basic authentication and request logging.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actix_web::{App, HttpServer};
//! use svckit_http::middleware::{BasicAuth, RequestLogging};
//! use svckit_http::rest::configure_defaults;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     svckit_core::Logger::init("INFO");
//!
//!     HttpServer::new(|| {
//!         App::new()
//!             .wrap(RequestLogging::new())
//!             .wrap(BasicAuth::required())
//!             .configure(configure_defaults)
//!     })
//!     .bind(("0.0.0.0", 8080))?
//!     .run()
//!     .await
//! }
//! ```

pub mod error;
pub mod middleware;
pub mod rest;

// Re-export main types
pub use error::RestErr;
pub use middleware::{BasicAuth, BasicCredentials, RequestLogging};
pub use rest::{RestErrMsg, RestMsg};
