//! HTTP server for verdantd

use crate::routes;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;
use verdant_common::ActionStore;

/// Application state shared across handlers
pub struct AppState {
    pub store: ActionStore,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: ActionStore) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }
}

/// Build the API router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::action_routes())
        .merge(routes::stats_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let app = app(Arc::new(state));

    // Bind to localhost only for security
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
