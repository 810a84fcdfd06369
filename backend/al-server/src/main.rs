pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use crate::routes::build_router;
pub use crate::state::AppState;

use al_gateway::ProviderClient;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up a .env file when present (development convenience)
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = al_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = al_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting al-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the database (runs migrations)
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = al_db::connect(&database_path).await?;
    info!("Database connection established");

    // Provider gateway client (one per process, stateless)
    let provider = Arc::new(ProviderClient::new(
        &config.provider.api_url,
        &config.provider.api_key,
    ));

    // Build application state and router
    let app_state = AppState { pool, provider };
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server, shutting down gracefully on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
