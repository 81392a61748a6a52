//! Constants for the utility library
//!
//! This module contains all constants used throughout the library.

// Secret handling constants
pub const KEY_SIZE: usize = 32;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16;

// Password policy constants
pub const GENERATED_PASSWORD_LENGTH: usize = 23;
/// Exclusive lower bound: a password passes only with strictly more
/// classified characters than this.
pub const MIN_CLASSIFIED_CHARS: usize = 8;

// Configuration constants
pub const DEFAULT_CONFIG_PATH: &str = ".";
pub const DEFAULT_CONFIG_NAME: &str = "config";

// Logging constants
pub const DEFAULT_LOG_LEVEL: &str = "INFO";
pub const DEBUG_LOG_LEVEL: &str = "DEBUG";

// Time constants
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_constants() {
        assert_eq!(KEY_SIZE, 32);
        assert_eq!(NONCE_SIZE, 12);
        assert_eq!(TAG_SIZE, 16);
    }

    #[test]
    fn test_password_constants() {
        assert_eq!(GENERATED_PASSWORD_LENGTH, 23);
        assert_eq!(MIN_CLASSIFIED_CHARS, 8);
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(DEFAULT_LOG_LEVEL, "INFO");
        assert_eq!(DEBUG_LOG_LEVEL, "DEBUG");
    }
}
