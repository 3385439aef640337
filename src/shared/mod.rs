//! Shared Module
//!
//! Cross-cutting utilities and types used across the crate.

pub mod errors;
pub mod logging;

pub use errors::{ConfigurationError, ConnectorError, EngineError, SourceError};
