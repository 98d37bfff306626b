//! Governance server binary for the Dominion service.
//!
//! This is the main entry point that wires together configuration, the
//! `PostgreSQL` pool, and the HTTP API. It loads configuration,
//! initializes all subsystems, and serves requests until the process is
//! terminated.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `dominion-config.yaml`
//! 3. Connect to `PostgreSQL` and run migrations
//! 4. Build the shared application state
//! 5. Serve the governance API

mod config;
mod error;

use std::path::Path;
use std::sync::Arc;

use dominion_api::server::{ServerConfig, start_server};
use dominion_api::state::AppState;
use dominion_db::{PostgresConfig, PostgresPool};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;
use crate::error::StartupError;

/// Path to the canonical configuration file, relative to the working
/// directory. Overridable with the `DOMINION_CONFIG` environment
/// variable.
const DEFAULT_CONFIG_PATH: &str = "dominion-config.yaml";

/// Application entry point for the governance server.
///
/// # Errors
///
/// Returns an error if any initialization step fails.
#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("dominion-server starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        host = config.server.host,
        port = config.server.port,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    // 3. Connect to PostgreSQL and run migrations.
    let pg_config = PostgresConfig::new(&config.database.url)
        .with_max_connections(config.database.max_connections);
    let db = PostgresPool::connect(&pg_config).await?;
    db.run_migrations().await?;

    // 4. Build shared application state.
    let state = Arc::new(AppState::new(db));

    // 5. Serve the governance API until terminated.
    let server_config = ServerConfig {
        host: config.server.host,
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}

/// Load the service configuration, falling back to defaults when the
/// file is absent.
///
/// A missing config file is not an error: the defaults (plus environment
/// overrides) are enough to run locally against the Docker database.
fn load_config() -> Result<ServiceConfig, StartupError> {
    let path = std::env::var("DOMINION_CONFIG")
        .unwrap_or_else(|_| String::from(DEFAULT_CONFIG_PATH));

    if Path::new(&path).exists() {
        info!(path, "Loading configuration file");
        Ok(ServiceConfig::from_file(Path::new(&path))?)
    } else {
        info!(path, "No configuration file found, using defaults");
        Ok(ServiceConfig::parse("{}")?)
    }
}
