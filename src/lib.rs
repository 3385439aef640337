//! Database Connector
//!
//! Reads connection parameters from a sectioned configuration file and opens
//! a live database connection, following Clean/Hexagonal Architecture
//! principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
