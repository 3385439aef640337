//! Domain Models
//!
//! Core types for configuration snapshots and connection parameters.

pub mod configuration;
pub mod connection_spec;

pub use configuration::{ConfigurationStore, Section};
pub use connection_spec::{ConnectionSpec, ConnectionUrl};
