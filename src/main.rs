//! Database Connector - Main Entry Point

use std::sync::Arc;

use sqlx::Connection;

use db_connector::application::use_cases::{ConnectRequest, ConnectUseCase};
use db_connector::infrastructure::driven_adapters::config::AppConfig;
use db_connector::infrastructure::driven_adapters::{IniConfigurationSource, SqlxEngine};
use db_connector::shared::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    logging::init(&config.logging.filter, config.logging.file.as_deref())?;
    tracing::debug!("Configuration loaded successfully");

    // Create adapters
    let configuration_source = Arc::new(IniConfigurationSource::new(&config.connector.config_path));
    let engine = Arc::new(SqlxEngine::new());

    // Create use case
    let connect_use_case =
        ConnectUseCase::new(configuration_source, engine).with_driver(config.connector.driver.clone());

    let request = ConnectRequest::new(&config.connector.section, &config.connector.dbms);
    let connection = connect_use_case.execute(&request).await?;

    connection.close().await?;
    tracing::debug!("Connection closed");

    Ok(())
}
