//! Coffer Server - Main entry point.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coffer_api::SecretsManagerGrpc;
use coffer_crypto::{parse_master_key, MasterKey};
use coffer_kms::KeyManagementService;
use coffer_storage_sqlite::SqliteStore;

#[derive(Parser)]
#[command(name = "coffer-server")]
#[command(about = "Coffer - Secrets and key management gRPC server")]
#[command(version)]
struct Cli {
    /// Server bind address
    #[arg(long, default_value = "0.0.0.0:50051", env = "COFFER_BIND_ADDRESS")]
    bind: String,

    /// Directory holding the database file
    #[arg(long, default_value = "data", env = "COFFER_DATA_DIR")]
    data_dir: PathBuf,

    /// Database name (`{data_dir}/{database}.db`)
    #[arg(long, default_value = "coffer", env = "COFFER_DATABASE")]
    database: String,

    /// Master key file
    #[arg(long, default_value = "master.key", env = "MASTER_KEY_PATH")]
    master_key: PathBuf,

    /// Seconds in-flight calls may run after shutdown is signalled
    #[arg(long, default_value = "5", env = "COFFER_SHUTDOWN_GRACE_SECS")]
    shutdown_grace: u64,
}

/// Reads and validates the master key file.
async fn load_master_key(path: &Path) -> Result<MasterKey> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read master key file {}", path.display()))?;

    parse_master_key(&contents)
        .with_context(|| format!("invalid master key file {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!("Starting Coffer server...");
    tracing::info!("Bind address: {}", cli.bind);

    let master_key = load_master_key(&cli.master_key).await?;
    tracing::info!(
        version = master_key.version(),
        path = %cli.master_key.display(),
        "Master key loaded"
    );

    let store = SqliteStore::open(&cli.data_dir, &cli.database)
        .await
        .context("failed to open database")?;
    let kms = Arc::new(KeyManagementService::new(store));
    let service = SecretsManagerGrpc::new(kms, Some(Arc::new(master_key)));

    let listener = TcpListener::bind(&cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
        tracing::info!("Shutting down...");
    };

    coffer_api::serve(
        listener,
        service,
        shutdown,
        Duration::from_secs(cli.shutdown_grace),
    )
    .await
    .context("gRPC server failed")?;

    tracing::info!("Coffer server stopped");

    Ok(())
}
