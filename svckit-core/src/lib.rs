//! svckit-core
//!
//! Shared utility library for backend services. Collects the pieces every
//! service needs but none should own: secrets handling, configuration
//! loading, structured logging setup and file helpers.
//!
//! ## Architecture
//!
//! - **Core**: password policy, password generation and secret encryption
//! - **Infrastructure**: configuration, logging, file storage
//! - **Shared**: error types, constants and small helpers
//!
//! ## Usage
//!
//! ```rust
//! use svckit_core::core::secrets::{decrypt_secret, encrypt_secret, verify_password};
//!
//! verify_password("somePass@123")?;
//!
//! let envelope = encrypt_secret("somePass@123", "vault-passphrase")?;
//! let plaintext = decrypt_secret(&envelope, "vault-passphrase")?;
//! assert_eq!(plaintext, "somePass@123");
//! # Ok::<(), svckit_core::shared::error::UtilsError>(())
//! ```

pub mod core;
pub mod infrastructure;
pub mod shared;

// Re-export main types and functions
pub use crate::core::secrets::{decrypt_secret, encrypt_secret, random_password, verify_password};
pub use crate::infrastructure::config::{ConfigFormat, ConfigLoader, ServerConfig, Validate};
pub use crate::infrastructure::logger::{LogConfig, Logger};
pub use crate::shared::error::{UtilsError, UtilsResult};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
