//! Database Connection Management
//!
//! SQLx-backed engine that opens live connections from connection strings.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::any::AnyConnectOptions;
use sqlx::{AnyConnection, ConnectOptions, Connection};
use zeroize::Zeroizing;

use crate::domain::gateways::DatabaseEngine;
use crate::domain::models::connection_spec::ConnectionUrl;
use crate::shared::errors::EngineError;

/// Database engine backed by SQLx's `Any` driver
///
/// SQLx picks its driver from the URL scheme, so the `+driver` part of the
/// scheme is dropped before parsing. Supported dialects are those SQLx was
/// built with (`mysql`, `mariadb`, `postgres`, `postgresql`).
#[derive(Debug, Clone, Copy)]
pub struct SqlxEngine;

impl SqlxEngine {
    /// Create a new SqlxEngine, installing the default SQLx drivers
    #[must_use]
    pub fn new() -> Self {
        sqlx::any::install_default_drivers();
        Self
    }

    /// Rewrite `{dbms}+{driver}://...` into the `{dbms}://...` form SQLx expects
    #[must_use]
    pub fn sqlx_url(url: &ConnectionUrl) -> Zeroizing<String> {
        Zeroizing::new(format!("{}{}", url.dbms(), url.after_scheme()))
    }
}

impl Default for SqlxEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseEngine for SqlxEngine {
    type Engine = AnyConnectOptions;
    type Connection = AnyConnection;

    fn create_engine(&self, url: &ConnectionUrl) -> Result<AnyConnectOptions, EngineError> {
        let sqlx_url = Self::sqlx_url(url);

        AnyConnectOptions::from_str(&sqlx_url).map_err(|e| {
            tracing::debug!(url = %url, "Rejected connection string");
            EngineError::InvalidUrl(e.to_string())
        })
    }

    async fn connect(&self, engine: &AnyConnectOptions) -> Result<AnyConnection, EngineError> {
        let mut connection = engine.connect().await?;
        connection.ping().await?;
        Ok(connection)
    }
}
