//! Common test utilities for e2e tests
//!
//! Provides test infrastructure for spinning up a MySQL container and writing
//! INI files that point at it.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mysql::Mysql;

use db_connector::application::use_cases::ConnectUseCase;
use db_connector::infrastructure::driven_adapters::{IniConfigurationSource, SqlxEngine};

/// Database created by the MySQL image
pub const TEST_DATABASE: &str = "test";

/// Test application context
pub struct TestApp {
    pub host: String,
    pub port: u16,
    _container: ContainerAsync<Mysql>,
}

impl TestApp {
    /// Start a fresh MySQL container (root user, empty password)
    pub async fn new() -> Self {
        let container = Mysql::default()
            .start()
            .await
            .expect("Failed to start MySQL container");

        let host = container
            .get_host()
            .await
            .expect("Failed to get host")
            .to_string();
        let port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get port");

        Self {
            host,
            port,
            _container: container,
        }
    }

    /// INI section body for the container, with the given credentials
    pub fn section(&self, user: &str, password: &str) -> String {
        format!(
            "user = {}\npassword = {}\nhost = {}\nport = {}\ndatabase = {}\n",
            user, password, self.host, self.port, TEST_DATABASE
        )
    }

    /// Build a connect use case reading from `ini`
    pub fn use_case(&self, ini: &NamedTempFile) -> ConnectUseCase<SqlxEngine> {
        ConnectUseCase::new(
            Arc::new(IniConfigurationSource::new(ini.path())),
            Arc::new(SqlxEngine::new()),
        )
    }
}

/// Write an INI file to a temporary location
pub fn write_ini(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ini")
        .tempfile()
        .expect("Failed to create INI file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write INI file");
    file
}
