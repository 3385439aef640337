//! Connect Use Case
//!
//! Resolves a configuration section into connection parameters and opens a
//! live connection through the database engine.

use std::sync::Arc;

use crate::domain::gateways::{ConfigurationSource, DatabaseEngine};
use crate::domain::models::connection_spec::{
    ConnectionSpec, ConnectionUrl, DEFAULT_DBMS, DEFAULT_DRIVER, DEFAULT_SECTION,
};
use crate::shared::errors::{ConfigurationError, ConnectorError};

/// Which section to read and which dialect to connect with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectRequest {
    pub section: String,
    pub dbms: String,
}

impl ConnectRequest {
    #[must_use]
    pub fn new(section: impl Into<String>, dbms: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            dbms: dbms.into(),
        }
    }
}

impl Default for ConnectRequest {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION, DEFAULT_DBMS)
    }
}

/// Use case for opening a database connection from configuration
pub struct ConnectUseCase<E: DatabaseEngine> {
    configuration_source: Arc<dyn ConfigurationSource>,
    engine: Arc<E>,
    driver: String,
}

impl<E: DatabaseEngine> ConnectUseCase<E> {
    /// Create a new ConnectUseCase using the default driver suffix
    #[must_use]
    pub fn new(configuration_source: Arc<dyn ConfigurationSource>, engine: Arc<E>) -> Self {
        Self {
            configuration_source,
            engine,
            driver: DEFAULT_DRIVER.to_string(),
        }
    }

    /// Override the driver suffix placed after the dialect in the scheme
    #[must_use]
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = driver.into();
        self
    }

    /// Resolve the connection string for a request without connecting
    ///
    /// # Errors
    ///
    /// Returns `ConnectorError::Source` if the configuration cannot be loaded.
    /// Returns `ConnectorError::Configuration` if the section is missing, a
    /// required key is missing, or the port is malformed.
    pub fn connection_url(&self, request: &ConnectRequest) -> Result<ConnectionUrl, ConnectorError> {
        let spec = self.resolve(request)?;
        Ok(self.build_url(&spec, request))
    }

    /// Execute the use case
    ///
    /// A single attempt: no retries and no timeout beyond the engine's own.
    ///
    /// # Errors
    ///
    /// Returns `ConnectorError::Source` or `ConnectorError::Configuration` as
    /// for [`ConnectUseCase::connection_url`], before any network I/O.
    /// Returns `ConnectorError::Connection` wrapping the engine's error if the
    /// connection cannot be opened or fails its liveness check.
    pub async fn execute(&self, request: &ConnectRequest) -> Result<E::Connection, ConnectorError> {
        tracing::debug!(section = %request.section, dbms = %request.dbms, "Connecting");

        let spec = self.resolve(request)?;
        let url = self.build_url(&spec, request);
        let dbms = request.dbms.to_uppercase();

        let result = match self.engine.create_engine(&url) {
            Ok(engine) => self.engine.connect(&engine).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(connection) => {
                tracing::info!(
                    dbms = %dbms,
                    database = %spec.database(),
                    "Connected to {} database '{}'",
                    dbms,
                    spec.database()
                );
                Ok(connection)
            }
            Err(source) => {
                tracing::error!(dbms = %dbms, "Connection failed: {}", source);
                Err(ConnectorError::Connection {
                    dbms: request.dbms.clone(),
                    source,
                })
            }
        }
    }

    fn resolve(&self, request: &ConnectRequest) -> Result<ConnectionSpec, ConnectorError> {
        let store = self.configuration_source.load()?;

        let Some(section) = store.section(&request.section) else {
            tracing::error!(
                section = %request.section,
                "Configuration section '{}' not found",
                request.section
            );
            return Err(ConfigurationError::MissingSection {
                section: request.section.clone(),
            }
            .into());
        };

        let spec = ConnectionSpec::from_section(&request.section, section).map_err(|e| {
            tracing::error!(section = %request.section, "Invalid connection settings: {}", e);
            e
        })?;

        Ok(spec)
    }

    fn build_url(&self, spec: &ConnectionSpec, request: &ConnectRequest) -> ConnectionUrl {
        let url = spec.connection_url(&request.dbms, &self.driver);
        tracing::debug!(url = %url, "Connection string built");
        url
    }
}
