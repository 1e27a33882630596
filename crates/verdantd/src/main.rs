//! Verdant Daemon - eco-action tracking service
//!
//! Owns the local action store and serves the HTTP API the CLI talks to.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use verdant_common::{ActionStore, TrackerConfig};
use verdantd::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TrackerConfig::load();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log.level.clone())),
        )
        .init();

    info!("Verdant daemon v{} starting", env!("CARGO_PKG_VERSION"));

    // A missing or locked database is fatal; there is nothing to serve.
    let db_path = config.db_path();
    let store = ActionStore::open(&db_path)
        .with_context(|| format!("Failed to open action store at {}", db_path.display()))?;
    info!("Store ready at {}", db_path.display());

    let state = AppState::new(store);
    server::run(state, &config.server.listen_addr).await
}
