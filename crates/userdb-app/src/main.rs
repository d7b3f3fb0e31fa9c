//! # userdb
//!
//! Loads configuration, opens the MySQL pool, checks that the database
//! answers, and closes the pool again.

use tracing::{error, info};
use userdb_app::di::{build_module, RepositoryResolver};
use userdb_app::logging::init_logging;
use userdb_config::{AppConfig, ConfigLoader, LoggingConfig};
use userdb_core::DbResult;

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    info!("Starting {}...", config.app.name);
    info!("Version: {}", config.app.version);
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> DbResult<()> {
    let module = build_module(&config.database).await?;
    let database = module.database();

    let result = database.ping().await;
    match &result {
        Ok(()) => info!("Database is reachable"),
        Err(e) => error!("Database ping failed: {}", e),
    }

    database.close().await;
    result
}
