//! Error Types
//!
//! Error taxonomy for loading configuration and opening connections.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while loading the configuration source itself
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ini::Error),
}

/// Configuration errors, always detected before any network attempt
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Section '{section}' not found in configuration")]
    MissingSection { section: String },

    #[error("Key '{key}' not found in section '{section}'")]
    MissingKey { section: String, key: String },

    #[error("Invalid port '{value}' in section '{section}': {source}")]
    InvalidPort {
        section: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors reported by a database engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid connection string: {0}")]
    InvalidUrl(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Outcome of a failed connect call
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Failed to connect to {dbms} database: {source}")]
    Connection {
        dbms: String,
        #[source]
        source: EngineError,
    },
}

impl ConnectorError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Source(_) => "SOURCE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Connection { .. } => "CONNECTION_ERROR",
        }
    }
}
