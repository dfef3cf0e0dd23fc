//! Contacts API - Main entry point
//!
//! Loads configuration from the environment, wires the store, service and
//! router together, and serves HTTP until Ctrl-C.

use anyhow::Result;
use contacts_api::repositories::{ContactRepository, SqliteContactRepository};
use contacts_api::services::{ContactService, ContactServiceImpl};
use contacts_api::{build_router, AppState, Config, Database, DatabaseConfig};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        database_url = %config.database_url,
        bind_address = %config.bind_address,
        "Configuration loaded"
    );

    let db = Arc::new(Database::new(DatabaseConfig::from(&config)));

    // Not fatal: every request retries the connection.
    if let Err(e) = db.connect().await {
        warn!(error = %e, "Contact store not reachable at startup");
    }

    let repository =
        Arc::new(SqliteContactRepository::new(db.clone())) as Arc<dyn ContactRepository>;
    let service = Arc::new(ContactServiceImpl::new(repository)) as Arc<dyn ContactService>;
    let router = build_router(AppState::new(service));

    contacts_api::server::run_server(config.bind_address, router).await?;

    db.close().await;
    info!("Contacts API shutdown complete");
    Ok(())
}
