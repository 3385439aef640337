//! Application Configuration
//!
//! Loads settings for the hosting binary from files and environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::models::connection_spec::{DEFAULT_DBMS, DEFAULT_DRIVER, DEFAULT_SECTION};

/// Connector configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorConfig {
    /// INI file holding the database sections
    pub config_path: PathBuf,
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(default = "default_dbms")]
    pub dbms: String,
    #[serde(default = "default_driver")]
    pub driver: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
    /// JSON log file opened in append mode, in addition to stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub connector: ConnectorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Override with environment variables (e.g., APP__CONNECTOR__CONFIG_PATH)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}

fn default_dbms() -> String {
    DEFAULT_DBMS.to_string()
}

fn default_driver() -> String {
    DEFAULT_DRIVER.to_string()
}

fn default_filter() -> String {
    "db_connector=info".to_string()
}
