//! Configuration loading
//!
//! Binds configuration files and environment variables onto typed config
//! structs. Environment variables always win over file values. Loading is
//! driven by an explicit [`ConfigLoader`] value instead of package-level
//! state, so different services (and tests) can hold different loaders.

use crate::infrastructure::storage::file_store;
use crate::shared::constants::{
    DEBUG_LOG_LEVEL, DEFAULT_CONFIG_NAME, DEFAULT_CONFIG_PATH, DEFAULT_LOG_LEVEL,
};
use crate::shared::error::{UtilsError, UtilsResult};
use crate::shared::utils::entry_exists;
use config::{Config, Environment, File, FileFormat};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

const VALID_SERVER_PROTOCOLS: [&str; 2] = ["http", "https"];
const VALID_SERVER_LOG_LEVELS: [&str; 2] = [DEFAULT_LOG_LEVEL, DEBUG_LOG_LEVEL];

const DEFAULT_SERVER_PROTOCOL: &str = "https";

/// Required-field validation for configuration structs.
///
/// Implementations should collect the names of missing mandatory values
/// and return [`UtilsError::MissingMandatoryParams`]. Config structs are
/// expected to tolerate absent keys during deserialization (serde
/// defaults) so that this trait is the single place required-ness is
/// enforced.
pub trait Validate {
    fn validate(&self) -> UtilsResult<()>;
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// dotenv-style `KEY=value` file, loaded into the process environment
    Env,
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Env => "env",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }

    fn file_format(&self) -> Option<FileFormat> {
        match self {
            ConfigFormat::Env => None,
            ConfigFormat::Json => Some(FileFormat::Json),
            ConfigFormat::Yaml => Some(FileFormat::Yaml),
            ConfigFormat::Toml => Some(FileFormat::Toml),
        }
    }
}

/// Loader for typed configuration structs
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
    name: String,
    format: ConfigFormat,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_PATH),
            name: DEFAULT_CONFIG_NAME.to_string(),
            format: ConfigFormat::Env,
        }
    }

    /// Set the directory the config file is looked up in
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = path.as_ref().to_path_buf();
        self
    }

    /// Set the config file base name (without extension)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = format;
        self
    }

    fn config_file(&self) -> PathBuf {
        self.path
            .join(format!("{}.{}", self.name, self.format.extension()))
    }

    /// Load, deserialize and validate a configuration struct.
    ///
    /// The config file is mandatory; environment variables override its
    /// values (matching on lowercased variable names).
    pub fn load<T>(&self) -> UtilsResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let target = std::any::type_name::<T>();
        let result = self.read_into::<T>();
        match &result {
            Ok(_) => info!("Configuration '{}' loaded successfully", target),
            Err(e) => error!(error = %e, "Error loading configuration '{}'", target),
        }
        result
    }

    fn read_into<T>(&self) -> UtilsResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let file = self.config_file();
        if !file_store::file_exists(&file) {
            return Err(UtilsError::FileNotFound(file.display().to_string()));
        }

        let mut builder = Config::builder();
        if let Some(format) = self.format.file_format() {
            builder = builder.add_source(File::from(file).format(format));
        } else {
            // dotenv does not override variables that are already set, so
            // real environment values keep precedence over the file.
            dotenv::from_path(&file).map_err(|e| UtilsError::config(e.to_string()))?;
        }
        let settings = builder.add_source(Environment::default()).build()?;

        let loaded: T = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }
}

/// HTTP server configuration shared by the backend services
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    #[serde(rename = "server_protocol")]
    pub protocol: String,
    #[serde(rename = "server_host")]
    pub host: String,
    #[serde(rename = "server_port")]
    pub port: String,
    #[serde(rename = "server_log_level")]
    pub log_level: String,
    #[serde(rename = "server_proxy_url")]
    pub proxy_url: String,
}

impl Validate for ServerConfig {
    fn validate(&self) -> UtilsResult<()> {
        let mut missing = Vec::new();
        if self.host.trim().is_empty() {
            missing.push("server_host");
        }
        if self.port.trim().is_empty() {
            missing.push("server_port");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(UtilsError::missing_params(missing))
        }
    }
}

impl ServerConfig {
    /// Apply defaults and check the value whitelists, returning the
    /// normalized configuration
    pub fn normalized(mut self) -> UtilsResult<Self> {
        if self.protocol.is_empty() {
            self.protocol = DEFAULT_SERVER_PROTOCOL.to_string();
        }
        if !entry_exists(&VALID_SERVER_PROTOCOLS, &self.protocol.as_str()) {
            return Err(UtilsError::config(format!(
                "Invalid server HTTP protocol : {}",
                self.protocol
            )));
        }

        if self.log_level.is_empty() {
            self.log_level = DEFAULT_LOG_LEVEL.to_string();
        }
        if !entry_exists(&VALID_SERVER_LOG_LEVELS, &self.log_level.as_str()) {
            return Err(UtilsError::config(format!(
                "Invalid server log level : {}",
                self.log_level
            )));
        }

        Ok(self)
    }

    /// Base URL of the server, e.g. `https://api.example.com:8443`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}
