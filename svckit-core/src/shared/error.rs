//! Error handling for the utility library
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Utility error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("password should be at least 8 characters long with at least one number, one uppercase letter, one lowercase letter and one special character")]
    InvalidPassword,

    #[error("password encryption error: {0}")]
    PasswordEncryption(String),

    #[error("password decryption error: {0}")]
    PasswordDecryption(String),

    #[error("Missing mandatory parameter(s) : [{}]", .0.join(", "))]
    MissingMandatoryParams(Vec<String>),

    #[error("File '{0}' was not found")]
    FileNotFound(String),

    #[error("Unable to create file '{file}' : {cause}")]
    FileCreate { file: String, cause: String },

    #[error("Unable to open file '{file}' : {cause}")]
    FileOpen { file: String, cause: String },

    #[error("Unable to read file '{file}' : {cause}")]
    FileRead { file: String, cause: String },

    #[error("Unable to write to the file '{file}' : {cause}")]
    FileWrite { file: String, cause: String },

    #[error("Unable to remove file '{file}' : {cause}")]
    FileRemove { file: String, cause: String },

    #[error("JSON marshal error : {0}")]
    JsonEncode(String),

    #[error("JSON unmarshal error : {0}")]
    JsonDecode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl UtilsError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn missing_params<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingMandatoryParams(params.into_iter().map(Into::into).collect())
    }
}

impl From<config::ConfigError> for UtilsError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

/// Result alias used across the library
pub type UtilsResult<T> = Result<T, UtilsError>;
