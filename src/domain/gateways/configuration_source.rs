//! Configuration Source Gateway
//!
//! Abstract trait for reading a sectioned configuration.

use crate::domain::models::configuration::ConfigurationStore;
use crate::shared::errors::SourceError;

/// Source of sectioned key/value configuration
pub trait ConfigurationSource: Send + Sync {
    /// Load a fresh snapshot of the configuration
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the underlying source is missing or unreadable.
    fn load(&self) -> Result<ConfigurationStore, SourceError>;
}
