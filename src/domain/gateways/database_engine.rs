//! Database Engine Gateway
//!
//! Abstract trait over the library that owns real database connections.

use async_trait::async_trait;

use crate::domain::models::connection_spec::ConnectionUrl;
use crate::shared::errors::EngineError;

/// Engine capable of turning a connection string into a live connection
#[async_trait]
pub trait DatabaseEngine: Send + Sync {
    /// Engine object built from a connection string
    type Engine: Send + Sync;

    /// Live connection handed to the caller
    type Connection: Send;

    /// Build an engine object from a connection string without any I/O
    fn create_engine(&self, url: &ConnectionUrl) -> Result<Self::Engine, EngineError>;

    /// Open a connection and check that it is alive
    async fn connect(&self, engine: &Self::Engine) -> Result<Self::Connection, EngineError>;
}
