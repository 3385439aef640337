//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod configuration_source;
pub mod database_engine;

pub use configuration_source::ConfigurationSource;
pub use database_engine::DatabaseEngine;
