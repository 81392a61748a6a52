//! Password security
//!
//! This module handles password strength validation, temporary password
//! generation and passphrase-based encryption of secret strings.
//!
//! Encryption seals with AES-256-GCM under a SHA-256 digest of the
//! passphrase; envelopes are base64 text so they can live in config
//! files, JSON payloads and database text columns.

pub mod password_generator;
pub mod password_policy;
pub mod secret_cipher;

// Re-export all public items from submodules
pub use password_generator::*;
pub use password_policy::*;
pub use secret_cipher::*;
