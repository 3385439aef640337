//! Domain Layer
//!
//! Contains the connection parameter model and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{ConfigurationSource, DatabaseEngine};
pub use models::{ConfigurationStore, ConnectionSpec, ConnectionUrl, Section};
