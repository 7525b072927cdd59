//! Shelter API Server – serves breeds and dogs from SQLite as JSON.
//!
//! This binary:
//! 1. Reads configuration from `shelter.conf`
//! 2. Creates the schema and, if enabled, seeds the demo data
//! 3. Runs the axum HTTP server until Ctrl-C

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use shelter_api::{db, seed, server};
use shelter_common::config::{self, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelter_api=info,tower_http=info".into()),
        )
        .init();

    // ── load config ──────────────────────────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Config::default_path().to_string());
    let config =
        config::load_or_default(&PathBuf::from(&config_path)).context("Config load failed")?;

    info!(
        "Shelter API starting (listen={}, db={})",
        config.api_listen_addr,
        config.db_path.display()
    );

    // ── initialize database ──────────────────────────────────────────
    db::initialize(&config.db_path)?;
    if config.seed_demo_data {
        seed::seed_demo_data(&config.db_path).context("Seeding demo data failed")?;
    }

    // ── ctrl-c ───────────────────────────────────────────────────────
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_flag = shutdown.clone();
    ctrlc::set_handler(move || {
        shutdown_flag.store(true, Ordering::Relaxed);
        info!("Shutdown signal received");
    })
    .context("Cannot set Ctrl-C handler")?;

    // ── start HTTP server ────────────────────────────────────────────
    server::run(config.db_path.clone(), &config.api_listen_addr, shutdown).await?;

    info!("Shelter API stopped");
    Ok(())
}
