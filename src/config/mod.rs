//! Configuration loading and management for the employee service.
//!
//! This module loads listener and logging settings from a YAML file,
//! with `HOST` and `PORT` environment overrides.
//!
//! # Example
//!
//! ```no_run
//! use employee_service::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/service.yaml").unwrap().into_config();
//! println!("Port: {}", config.server.port);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, HOST_ENV, PORT_ENV};
pub use types::{DEFAULT_LOG_FILTER, DEFAULT_PORT, LoggingConfig, ServerConfig, ServiceConfig};
