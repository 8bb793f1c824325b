//! Web front end for EduDiff Lite.
//!
//! Serves the landing page, the auth pages and the chat page as server-rendered
//! HTML driven by htmx. Questions are forwarded to the generation backend;
//! signed-in profiles are mirrored into SQLite.

mod config;
mod error;
mod identity;
mod media;
mod routes;
mod state;
mod sync;

use std::sync::Arc;

use chat_core::Generator;
use database::Database;
use generation_client::{ApiConfig, GenerationClient};
use mock_generator::{CannedGenerator, DelayedGenerator};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, GeneratorKind};
use crate::state::AppState;

/// Simulated latency of the offline generator.
const MOCK_LATENCY_MS: u64 = 1500;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting EduDiff web server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;
    let profiles = database::user_profile::count_profiles(db.pool()).await?;
    info!(profiles, "Database ready");

    let backend = GenerationClient::new(ApiConfig::new(&config.api_url))?;
    let generator: Arc<dyn Generator> = match config.generator {
        GeneratorKind::Api => Arc::new(backend.clone()),
        GeneratorKind::Mock => Arc::new(DelayedGenerator::with_millis(
            CannedGenerator::default(),
            MOCK_LATENCY_MS,
        )),
    };
    info!(generator = generator.name(), "Generator ready");

    // Build application state
    let state = AppState::new(
        db.clone(),
        generator,
        backend,
        config.auth.clone(),
        config.max_sessions,
    );

    let app = routes::app(state, &config.static_dir);

    // Start server
    info!(addr = %config.addr, "EduDiff web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    db.close().await;
    info!("EduDiff web server stopped");

    Ok(())
}
