//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file and layering environment overrides on top.

use std::fs;
use std::net::IpAddr;
use std::path::Path;

use tracing::warn;

use crate::error::{ServiceError, ServiceResult};

use super::types::ServiceConfig;

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the listen address.
pub const HOST_ENV: &str = "HOST";

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use employee_service::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?.with_env_overrides();
/// println!("Listening on {}", loader.config().server.addr());
/// # Ok::<(), employee_service::error::ServiceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::ConfigNotFound`] if the file cannot be read and
    /// [`ServiceError::ConfigParseError`] if it is not valid configuration YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses configuration from YAML text. `source` names the text in errors.
    pub fn parse(content: &str, source: &str) -> ServiceResult<Self> {
        // An empty document deserializes to unit, so treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config =
            serde_yaml::from_str(content).map_err(|e| ServiceError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Applies `HOST` and `PORT` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Applies `HOST` and `PORT` using `lookup` to read variables.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(PORT_ENV) {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.config.server.port = port,
                Err(_) => warn!(value = %raw, "Ignoring invalid PORT"),
            }
        }
        if let Some(raw) = lookup(HOST_ENV) {
            match raw.trim().parse::<IpAddr>() {
                Ok(host) => self.config.server.host = host,
                Err(_) => warn!(value = %raw, "Ignoring invalid HOST"),
            }
        }
        self
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}
