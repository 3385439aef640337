//! Infrastructure Layer
//!
//! Contains all external concerns: driven adapters for configuration files
//! and the database engine.

pub mod driven_adapters;
