//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - INI configuration files
//! - SQLx database engine
//! - Hosting application configuration

pub mod config;
pub mod database;
pub mod ini_source;

pub use config::AppConfig;
pub use database::SqlxEngine;
pub use ini_source::IniConfigurationSource;
